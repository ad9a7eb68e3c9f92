use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, comment::CommentsResponseDto},
    server::{error::AppError, service::comment::CommentService, state::AppState},
};

/// Tag for grouping comment endpoints in OpenAPI documentation
pub static COMMENT_TAG: &str = "comment";

/// List the comments of an article, newest first.
///
/// # Returns
/// - `200 OK` - Comments, empty if the article has none
/// - `400 Bad Request` - ID is not a positive integer
/// - `404 Not Found` - No article with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/articles/{article_id}/comments",
    tag = COMMENT_TAG,
    params(
        ("article_id" = i32, Path, description = "Article ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved comments", body = CommentsResponseDto),
        (status = 400, description = "Invalid article ID", body = ErrorDto),
        (status = 404, description = "Article not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_article_comments(
    State(state): State<AppState>,
    Path(article_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = CommentService::new(&state.db);

    let comments = service.get_by_article_id(&article_id).await?;

    Ok((
        StatusCode::OK,
        Json(CommentsResponseDto {
            comments: comments.into_iter().map(|c| c.into_dto()).collect(),
        }),
    ))
}
