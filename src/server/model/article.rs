//! Article domain models and parameters.
//!
//! Provides the domain models returned by the article service, the raw query type handed
//! over by the HTTP layer, and the validated listing parameters built from it. Sorting is
//! restricted to the closed `ArticleSortBy` and `SortOrder` enums; nothing a client sends
//! is ever spliced into SQL.

use chrono::{DateTime, Utc};
use std::str::FromStr;

use crate::{
    model::article::{ArticleDto, ArticleSummaryDto, PaginatedArticlesDto},
    server::error::{message, AppError},
};

/// Image used when an article is created without one.
pub const DEFAULT_ARTICLE_IMG_URL: &str =
    "https://images.pexels.com/photos/97050/pexels-photo-97050.jpeg?w=700&h=700";

/// Page size used when the client does not send `limit`.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Larger `limit` values are clamped to this.
pub const MAX_PAGE_SIZE: u64 = 100;

/// Column an article listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArticleSortBy {
    Title,
    Topic,
    Author,
    #[default]
    CreatedAt,
    Votes,
    CommentCount,
    ArticleId,
}

impl ArticleSortBy {
    /// Allow-list of accepted `sort_by` keys.
    pub const ALLOWED: [(&'static str, ArticleSortBy); 7] = [
        ("title", ArticleSortBy::Title),
        ("topic", ArticleSortBy::Topic),
        ("author", ArticleSortBy::Author),
        ("created_at", ArticleSortBy::CreatedAt),
        ("votes", ArticleSortBy::Votes),
        ("comment_count", ArticleSortBy::CommentCount),
        ("article_id", ArticleSortBy::ArticleId),
    ];
}

impl FromStr for ArticleSortBy {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALLOWED
            .iter()
            .find(|(key, _)| *key == value)
            .map(|(_, sort_by)| *sort_by)
            .ok_or_else(|| AppError::bad_request(message::INVALID_INPUT))
    }
}

/// Direction of an article listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl FromStr for SortOrder {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Asc),
            "desc" | "descending" => Ok(Self::Desc),
            _ => Err(AppError::bad_request(message::INVALID_INPUT)),
        }
    }
}

/// Unvalidated listing parameters exactly as they arrived over HTTP.
#[derive(Debug, Clone, Default)]
pub struct ArticleQuery {
    pub topic: Option<String>,
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
    pub p: Option<String>,
    pub limit: Option<String>,
}

/// Row filters applied to both the page query and the total count.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticleFilter {
    /// Case-insensitive substring matched against title, body, topic and author.
    pub search: Option<String>,
    /// Exact topic slug. Must reference an existing topic.
    pub topic: Option<String>,
    /// Exact author username.
    pub author: Option<String>,
}

/// Validated listing parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleListParams {
    pub filter: ArticleFilter,
    pub sort_by: ArticleSortBy,
    pub order: SortOrder,
    /// One-indexed page number.
    pub page: u64,
    pub per_page: u64,
}

impl ArticleListParams {
    /// Number of rows skipped before the requested page.
    pub fn offset(&self) -> u64 {
        (self.page - 1) * self.per_page
    }
}

impl Default for ArticleListParams {
    fn default() -> Self {
        Self {
            filter: ArticleFilter::default(),
            sort_by: ArticleSortBy::default(),
            order: SortOrder::default(),
            page: 1,
            per_page: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Full article with its live comment count.
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub article_id: i32,
    pub author: String,
    pub title: String,
    pub body: String,
    pub topic: String,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    pub article_img_url: String,
    pub comment_count: u64,
}

impl Article {
    /// Builds the domain model from a stored row and a separately known comment count.
    pub fn from_entity(entity: entity::article::Model, comment_count: u64) -> Self {
        Self {
            article_id: entity.article_id,
            author: entity.author,
            title: entity.title,
            body: entity.body,
            topic: entity.topic,
            created_at: entity.created_at,
            votes: entity.votes,
            article_img_url: entity.article_img_url,
            comment_count,
        }
    }

    pub fn into_dto(self) -> ArticleDto {
        ArticleDto {
            article_id: self.article_id,
            author: self.author,
            title: self.title,
            body: self.body,
            topic: self.topic,
            created_at: self.created_at,
            votes: self.votes,
            article_img_url: self.article_img_url,
            comment_count: self.comment_count,
        }
    }
}

/// Outcome of adding a delta to an article's votes.
#[derive(Debug, Clone, PartialEq)]
pub enum VoteUpdate {
    /// Votes changed; carries the article as stored afterwards.
    Applied(Article),
    /// No article with that id.
    NotFound,
    /// The new total would not fit in the votes column; nothing was written.
    OutOfRange,
}

/// Article as shown in listings: everything except the body.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleSummary {
    pub article_id: i32,
    pub author: String,
    pub title: String,
    pub topic: String,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    pub article_img_url: String,
    pub comment_count: u64,
}

impl ArticleSummary {
    pub fn into_dto(self) -> ArticleSummaryDto {
        ArticleSummaryDto {
            article_id: self.article_id,
            author: self.author,
            title: self.title,
            topic: self.topic,
            created_at: self.created_at,
            votes: self.votes,
            article_img_url: self.article_img_url,
            comment_count: self.comment_count,
        }
    }
}

/// One page of article summaries plus the number of rows matching the filter.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedArticles {
    pub articles: Vec<ArticleSummary>,
    /// Matching rows across all pages.
    pub total_count: u64,
}

impl PaginatedArticles {
    pub fn into_dto(self) -> PaginatedArticlesDto {
        PaginatedArticlesDto {
            articles: self.articles.into_iter().map(|a| a.into_dto()).collect(),
            total_count: self.total_count,
        }
    }
}

/// Raw create request; every field is validated by the service.
#[derive(Debug, Clone, Default)]
pub struct CreateArticleParams {
    pub author: String,
    pub title: String,
    pub body: String,
    pub topic: String,
    pub article_img_url: Option<String>,
}

/// Insert-ready article after validation and defaulting.
#[derive(Debug, Clone, PartialEq)]
pub struct NewArticle {
    pub author: String,
    pub title: String,
    pub body: String,
    pub topic: String,
    pub article_img_url: String,
}
