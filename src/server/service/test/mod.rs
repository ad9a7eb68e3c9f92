mod article;
mod comment;
