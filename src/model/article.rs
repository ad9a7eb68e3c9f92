use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ArticleDto {
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

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ArticleSummaryDto {
    pub article_id: i32,
    pub author: String,
    pub title: String,
    pub topic: String,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    pub article_img_url: String,
    pub comment_count: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedArticlesDto {
    pub articles: Vec<ArticleSummaryDto>,
    pub total_count: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ArticleResponseDto {
    pub article: ArticleDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct NewArticleResponseDto {
    #[serde(rename = "newArticle")]
    pub new_article: ArticleDto,
}

/// Missing fields deserialize as empty so the service decides which error applies.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct CreateArticleDto {
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub article_img_url: Option<String>,
}

/// `inc_votes` is kept loosely typed so a non-numeric value reaches the service and
/// produces the dedicated vote error instead of a generic deserialization failure.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct UpdateVotesDto {
    #[serde(default)]
    #[schema(value_type = i32)]
    pub inc_votes: serde_json::Value,
}

impl UpdateVotesDto {
    /// Renders the delta as the string form the service validates.
    pub fn raw_increment(&self) -> String {
        match &self.inc_votes {
            serde_json::Value::Number(n) => n.to_string(),
            serde_json::Value::String(s) => s.clone(),
            _ => String::new(),
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct UpdateArticleBodyDto {
    #[serde(default)]
    pub body: String,
}
