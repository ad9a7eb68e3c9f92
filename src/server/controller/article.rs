use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        article::{
            ArticleResponseDto, CreateArticleDto, NewArticleResponseDto, PaginatedArticlesDto,
            UpdateArticleBodyDto, UpdateVotesDto,
        },
    },
    server::{
        error::AppError,
        middleware::acting_user::ActingUser,
        model::article::{ArticleQuery, CreateArticleParams},
        service::article::ArticleService,
        state::AppState,
    },
};

/// Tag for grouping article endpoints in OpenAPI documentation
pub static ARTICLE_TAG: &str = "article";

/// Listing query string.
///
/// Every field is taken as a raw string; the service validates and reports bad values.
#[derive(Deserialize, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ArticleListQuery {
    /// Exact topic slug
    pub topic: Option<String>,
    /// Case-insensitive substring of title, body, topic or author
    pub search: Option<String>,
    /// One of title, topic, author, created_at, votes, comment_count, article_id (default: created_at)
    pub sort_by: Option<String>,
    /// asc or desc (default: desc)
    pub order: Option<String>,
    /// Page number, starting at 1 (default: 1)
    pub p: Option<String>,
    /// Page size (default: 10, max: 100)
    pub limit: Option<String>,
}

impl From<ArticleListQuery> for ArticleQuery {
    fn from(query: ArticleListQuery) -> Self {
        Self {
            topic: query.topic,
            search: query.search,
            sort_by: query.sort_by,
            order: query.order,
            p: query.p,
            limit: query.limit,
        }
    }
}

/// List articles.
///
/// Returns one page of article summaries, optionally filtered by topic and search term,
/// together with the number of articles matching the filter across all pages.
///
/// # Returns
/// - `200 OK` - Page of articles and total count
/// - `400 Bad Request` - Invalid sort_by, order, p or limit
/// - `404 Not Found` - Topic does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/articles",
    tag = ARTICLE_TAG,
    params(ArticleListQuery),
    responses(
        (status = 200, description = "Successfully retrieved articles", body = PaginatedArticlesDto),
        (status = 400, description = "Invalid query parameter", body = ErrorDto),
        (status = 404, description = "Topic not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_articles(
    State(state): State<AppState>,
    Query(query): Query<ArticleListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = ArticleService::new(&state.db);

    let articles = service.get_all(query.into()).await?;

    Ok((StatusCode::OK, Json(articles.into_dto())))
}

/// Create an article.
///
/// # Returns
/// - `201 Created` - Created article under the `newArticle` key
/// - `400 Bad Request` - Missing title or body
/// - `404 Not Found` - Author or topic does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/articles",
    tag = ARTICLE_TAG,
    request_body = CreateArticleDto,
    responses(
        (status = 201, description = "Successfully created article", body = NewArticleResponseDto),
        (status = 400, description = "Invalid article data", body = ErrorDto),
        (status = 404, description = "User or topic not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_article(
    State(state): State<AppState>,
    Json(payload): Json<CreateArticleDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ArticleService::new(&state.db);

    let article = service
        .create(CreateArticleParams {
            author: payload.author,
            title: payload.title,
            body: payload.body,
            topic: payload.topic,
            article_img_url: payload.article_img_url,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(NewArticleResponseDto {
            new_article: article.into_dto(),
        }),
    ))
}

/// Get an article by ID.
///
/// # Returns
/// - `200 OK` - Article with its comment count
/// - `400 Bad Request` - ID is not a positive integer
/// - `404 Not Found` - No article with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/articles/{article_id}",
    tag = ARTICLE_TAG,
    params(
        ("article_id" = i32, Path, description = "Article ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved article", body = ArticleResponseDto),
        (status = 400, description = "Invalid article ID", body = ErrorDto),
        (status = 404, description = "Article not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_article_by_id(
    State(state): State<AppState>,
    Path(article_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = ArticleService::new(&state.db);

    let article = service.get_by_id(&article_id).await?;

    Ok((
        StatusCode::OK,
        Json(ArticleResponseDto {
            article: article.into_dto(),
        }),
    ))
}

/// Change an article's votes.
///
/// Adds `inc_votes` (which may be negative) to the article's current vote count.
///
/// # Returns
/// - `200 OK` - Updated article
/// - `400 Bad Request` - Non-numeric increment or invalid ID
/// - `404 Not Found` - No article with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/articles/{article_id}",
    tag = ARTICLE_TAG,
    params(
        ("article_id" = i32, Path, description = "Article ID")
    ),
    request_body = UpdateVotesDto,
    responses(
        (status = 200, description = "Successfully updated votes", body = ArticleResponseDto),
        (status = 400, description = "Invalid increment or article ID", body = ErrorDto),
        (status = 404, description = "Article not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_article_votes(
    State(state): State<AppState>,
    Path(article_id): Path<String>,
    Json(payload): Json<UpdateVotesDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ArticleService::new(&state.db);

    let article = service
        .update_votes(&article_id, &payload.raw_increment())
        .await?;

    Ok((
        StatusCode::OK,
        Json(ArticleResponseDto {
            article: article.into_dto(),
        }),
    ))
}

/// Replace an article's body.
///
/// # Access Control
/// - Only the article's author may change its body
///
/// # Returns
/// - `200 OK` - Updated article
/// - `400 Bad Request` - Empty body or invalid ID
/// - `401 Unauthorized` - No acting user, or the article belongs to another user
/// - `404 Not Found` - No article with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/articles/{article_id}/body",
    tag = ARTICLE_TAG,
    params(
        ("article_id" = i32, Path, description = "Article ID"),
        ("x-username" = String, Header, description = "Acting user")
    ),
    request_body = UpdateArticleBodyDto,
    responses(
        (status = 200, description = "Successfully updated article body", body = ArticleResponseDto),
        (status = 400, description = "Invalid body or article ID", body = ErrorDto),
        (status = 401, description = "Not authenticated or not the author", body = ErrorDto),
        (status = 404, description = "Article not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_article_body(
    State(state): State<AppState>,
    ActingUser(username): ActingUser,
    Path(article_id): Path<String>,
    Json(payload): Json<UpdateArticleBodyDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ArticleService::new(&state.db);

    let article = service
        .update_body(&article_id, &username, payload.body)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ArticleResponseDto {
            article: article.into_dto(),
        }),
    ))
}

/// Delete an article and its comments.
///
/// # Access Control
/// - Only the article's author may delete it
///
/// # Returns
/// - `204 No Content` - Article deleted
/// - `400 Bad Request` - Invalid ID
/// - `401 Unauthorized` - No acting user, or the article belongs to another user
/// - `404 Not Found` - No article with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/articles/{article_id}",
    tag = ARTICLE_TAG,
    params(
        ("article_id" = i32, Path, description = "Article ID"),
        ("x-username" = String, Header, description = "Acting user")
    ),
    responses(
        (status = 204, description = "Successfully deleted article"),
        (status = 400, description = "Invalid article ID", body = ErrorDto),
        (status = 401, description = "Not authenticated or not the author", body = ErrorDto),
        (status = 404, description = "Article not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_article(
    State(state): State<AppState>,
    ActingUser(username): ActingUser,
    Path(article_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = ArticleService::new(&state.db);

    service.delete(&article_id, &username).await?;

    Ok(StatusCode::NO_CONTENT)
}
