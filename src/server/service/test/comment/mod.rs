use crate::server::{
    error::{message, AppError},
    service::comment::CommentService,
};
use test_utils::{builder::TestBuilder, factory};
