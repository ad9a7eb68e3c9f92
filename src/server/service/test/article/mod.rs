use crate::server::{
    error::{message, AppError},
    model::article::{ArticleQuery, CreateArticleParams, DEFAULT_ARTICLE_IMG_URL},
    service::article::ArticleService,
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;

/// Asserts that `result` failed with the given variant and exact client message.
fn assert_error<T: std::fmt::Debug>(result: Result<T, AppError>, expected: AppError) {
    match (result, expected) {
        (Err(AppError::BadRequest(actual)), AppError::BadRequest(wanted))
        | (Err(AppError::NotFound(actual)), AppError::NotFound(wanted))
        | (Err(AppError::Unauthorized(actual)), AppError::Unauthorized(wanted)) => {
            assert_eq!(actual, wanted)
        }
        (other, wanted) => panic!("expected {:?}, got {:?}", wanted, other),
    }
}

fn query() -> ArticleQuery {
    ArticleQuery::default()
}
