use axum::{
    routing::{get, patch},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::ErrorDto,
        article::{
            ArticleDto, ArticleResponseDto, ArticleSummaryDto, CreateArticleDto,
            NewArticleResponseDto, PaginatedArticlesDto, UpdateArticleBodyDto, UpdateVotesDto,
        },
        comment::{CommentDto, CommentsResponseDto},
        topic::{TopicDto, TopicsResponseDto},
        user::{UserDto, UserResponseDto, UsersResponseDto},
    },
    server::{
        controller::{
            article::{
                self, create_article, delete_article, get_article_by_id, get_articles,
                update_article_body, update_article_votes,
            },
            comment::{self, get_article_comments},
            topic::{self, get_topics},
            user::{self, get_user_articles, get_user_by_username, get_user_comments, get_users},
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Newsboard API", description = "Articles, comments, topics and users"),
    paths(
        article::get_articles,
        article::create_article,
        article::get_article_by_id,
        article::update_article_votes,
        article::update_article_body,
        article::delete_article,
        comment::get_article_comments,
        topic::get_topics,
        user::get_users,
        user::get_user_by_username,
        user::get_user_articles,
        user::get_user_comments,
    ),
    components(schemas(
        ErrorDto,
        ArticleDto,
        ArticleSummaryDto,
        PaginatedArticlesDto,
        ArticleResponseDto,
        NewArticleResponseDto,
        CreateArticleDto,
        UpdateVotesDto,
        UpdateArticleBodyDto,
        CommentDto,
        CommentsResponseDto,
        TopicDto,
        TopicsResponseDto,
        UserDto,
        UserResponseDto,
        UsersResponseDto,
    )),
    tags(
        (name = "article", description = "Article listing and management"),
        (name = "comment", description = "Article comments"),
        (name = "topic", description = "Topics"),
        (name = "user", description = "Users"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/articles", get(get_articles).post(create_article))
        .route(
            "/api/articles/{article_id}",
            get(get_article_by_id)
                .patch(update_article_votes)
                .delete(delete_article),
        )
        .route("/api/articles/{article_id}/body", patch(update_article_body))
        .route("/api/articles/{article_id}/comments", get(get_article_comments))
        .route("/api/topics", get(get_topics))
        .route("/api/users", get(get_users))
        .route("/api/users/{username}", get(get_user_by_username))
        .route("/api/users/{username}/articles", get(get_user_articles))
        .route("/api/users/{username}/comments", get(get_user_comments))
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
}
