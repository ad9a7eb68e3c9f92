use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        article::PaginatedArticlesDto,
        comment::CommentsResponseDto,
        user::{UserResponseDto, UsersResponseDto},
    },
    server::{
        controller::article::ArticleListQuery,
        error::AppError,
        service::{article::ArticleService, comment::CommentService, user::UserService},
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// List all users.
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Successfully retrieved users", body = UsersResponseDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let users = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(UsersResponseDto {
            users: users.into_iter().map(|u| u.into_dto()).collect(),
        }),
    ))
}

/// Get a user by username.
///
/// # Returns
/// - `200 OK` - User details
/// - `404 Not Found` - No user with that username
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/users/{username}",
    tag = USER_TAG,
    params(
        ("username" = String, Path, description = "Username")
    ),
    responses(
        (status = 200, description = "Successfully retrieved user", body = UserResponseDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_by_username(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let user = service.get_by_username(&username).await?;

    Ok((
        StatusCode::OK,
        Json(UserResponseDto {
            user: user.into_dto(),
        }),
    ))
}

/// List the articles written by a user.
///
/// Accepts the same query parameters as `GET /api/articles`.
///
/// # Returns
/// - `200 OK` - Page of the user's articles and total count
/// - `400 Bad Request` - Invalid query parameter
/// - `404 Not Found` - User or topic does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/users/{username}/articles",
    tag = USER_TAG,
    params(
        ("username" = String, Path, description = "Username"),
        ArticleListQuery
    ),
    responses(
        (status = 200, description = "Successfully retrieved articles", body = PaginatedArticlesDto),
        (status = 400, description = "Invalid query parameter", body = ErrorDto),
        (status = 404, description = "User or topic not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_articles(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Query(query): Query<ArticleListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = ArticleService::new(&state.db);

    let articles = service.get_by_author(&username, query.into()).await?;

    Ok((StatusCode::OK, Json(articles.into_dto())))
}

/// List the comments written by a user, newest first.
///
/// # Returns
/// - `200 OK` - Comments, empty if the user has written none
/// - `404 Not Found` - No user with that username
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/users/{username}/comments",
    tag = USER_TAG,
    params(
        ("username" = String, Path, description = "Username")
    ),
    responses(
        (status = 200, description = "Successfully retrieved comments", body = CommentsResponseDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_comments(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = CommentService::new(&state.db);

    let comments = service.get_by_author(&username).await?;

    Ok((
        StatusCode::OK,
        Json(CommentsResponseDto {
            comments: comments.into_iter().map(|c| c.into_dto()).collect(),
        }),
    ))
}
