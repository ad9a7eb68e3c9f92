//! Article service: validation and orchestration for every article operation.
//!
//! Controllers hand over raw strings; this service parses them, checks the referenced
//! topic, user and article rows exist, enforces ownership, and only then calls the
//! repository. Validation failures never reach the database.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{article::ArticleRepository, topic::TopicRepository, user::UserRepository},
    error::{message, AppError},
    model::article::{
        Article, ArticleFilter, ArticleListParams, ArticleQuery, ArticleSortBy,
        CreateArticleParams, NewArticle, PaginatedArticles, SortOrder, VoteUpdate,
        DEFAULT_ARTICLE_IMG_URL, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
    },
    util::parse::{non_empty, parse_article_id, parse_positive_integer, parse_vote_increment},
};

pub struct ArticleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ArticleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists articles with optional topic filter, search, sorting and pagination.
    ///
    /// A topic that does not exist is reported before any other parameter is looked at.
    ///
    /// # Returns
    /// - `Ok(PaginatedArticles)` - Requested page and filter-wide total count
    /// - `Err(AppError::NotFound)` - "Topic not found"
    /// - `Err(AppError::BadRequest)` - "Invalid input" for sort_by, order, p or limit
    pub async fn get_all(&self, query: ArticleQuery) -> Result<PaginatedArticles, AppError> {
        let params = self.list_params(query, None).await?;
        self.list(params).await
    }

    /// Lists the articles written by one user, with the same options as [`Self::get_all`].
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - "User not found" when the username is unknown
    pub async fn get_by_author(
        &self,
        username: &str,
        query: ArticleQuery,
    ) -> Result<PaginatedArticles, AppError> {
        if UserRepository::new(self.db)
            .find_by_username(username)
            .await?
            .is_none()
        {
            return Err(AppError::not_found(message::USER_NOT_FOUND));
        }

        let params = self.list_params(query, Some(username.to_string())).await?;
        self.list(params).await
    }

    /// Gets a single article with its comment count.
    ///
    /// # Returns
    /// - `Ok(Article)` - Article found
    /// - `Err(AppError::BadRequest)` - Id is not a positive integer
    /// - `Err(AppError::NotFound)` - "Article ID not found"
    pub async fn get_by_id(&self, article_id: &str) -> Result<Article, AppError> {
        let article_id = parse_article_id(article_id)?;

        ArticleRepository::new(self.db)
            .get_by_id(article_id)
            .await?
            .ok_or_else(|| AppError::not_found(message::ARTICLE_ID_NOT_FOUND))
    }

    /// Adds a signed delta to an article's votes.
    ///
    /// The delta is validated before the id.
    ///
    /// # Returns
    /// - `Ok(Article)` - Article after the update
    /// - `Err(AppError::BadRequest)` - "Invalid input for increment votes" (also when the
    ///   new total would overflow) or "Invalid input"
    /// - `Err(AppError::NotFound)` - "Article ID not found"
    pub async fn update_votes(
        &self,
        article_id: &str,
        inc_votes: &str,
    ) -> Result<Article, AppError> {
        let delta = parse_vote_increment(inc_votes)?;
        let article_id = parse_article_id(article_id)?;

        let article = match ArticleRepository::new(self.db)
            .increment_votes(article_id, delta)
            .await?
        {
            VoteUpdate::Applied(article) => article,
            VoteUpdate::NotFound => {
                return Err(AppError::not_found(message::ARTICLE_ID_NOT_FOUND));
            }
            VoteUpdate::OutOfRange => {
                return Err(AppError::bad_request(message::INVALID_VOTE_INCREMENT));
            }
        };

        tracing::debug!(
            "Article {} votes changed by {} to {}",
            article_id,
            delta,
            article.votes
        );

        Ok(article)
    }

    /// Creates an article after checking its author and topic exist.
    ///
    /// # Returns
    /// - `Ok(Article)` - Created article with `votes = 0` and `comment_count = 0`
    /// - `Err(AppError::BadRequest)` - Missing title or body
    /// - `Err(AppError::NotFound)` - "User not found" or "Topic not found"
    pub async fn create(&self, params: CreateArticleParams) -> Result<Article, AppError> {
        if params.title.is_empty() || params.body.is_empty() {
            return Err(AppError::bad_request(message::INVALID_INPUT));
        }

        if UserRepository::new(self.db)
            .find_by_username(&params.author)
            .await?
            .is_none()
        {
            return Err(AppError::not_found(message::USER_NOT_FOUND));
        }

        if !TopicRepository::new(self.db).exists(&params.topic).await? {
            return Err(AppError::not_found(message::TOPIC_NOT_FOUND));
        }

        let article_img_url = non_empty(params.article_img_url)
            .unwrap_or_else(|| DEFAULT_ARTICLE_IMG_URL.to_string());

        let article = ArticleRepository::new(self.db)
            .create(NewArticle {
                author: params.author,
                title: params.title,
                body: params.body,
                topic: params.topic,
                article_img_url,
            })
            .await?;

        tracing::info!(
            "Article {} created by {}",
            article.article_id,
            article.author
        );

        Ok(article)
    }

    /// Replaces the body of an article owned by `username`.
    ///
    /// # Returns
    /// - `Ok(Article)` - Updated article carrying the comment count read before the update
    /// - `Err(AppError::BadRequest)` - Empty body or invalid id
    /// - `Err(AppError::NotFound)` - "Article not found"
    /// - `Err(AppError::Unauthorized)` - "Article belongs to another user"
    pub async fn update_body(
        &self,
        article_id: &str,
        username: &str,
        body: String,
    ) -> Result<Article, AppError> {
        if body.is_empty() {
            return Err(AppError::bad_request(message::INVALID_INPUT));
        }
        let article_id = parse_article_id(article_id)?;

        let repo = ArticleRepository::new(self.db);

        let existing = repo
            .get_by_id(article_id)
            .await?
            .ok_or_else(|| AppError::not_found(message::ARTICLE_NOT_FOUND))?;

        if existing.author != username {
            return Err(AppError::unauthorized(
                message::ARTICLE_BELONGS_TO_ANOTHER_USER,
            ));
        }

        let updated = repo
            .update_body_if_owned(article_id, username, body)
            .await?
            .ok_or_else(|| AppError::not_found(message::ARTICLE_NOT_FOUND))?;

        tracing::info!("Article {} body updated by {}", article_id, username);

        Ok(Article::from_entity(updated, existing.comment_count))
    }

    /// Deletes an article owned by `username` together with its comments.
    ///
    /// # Returns
    /// - `Ok(())` - Article and comments deleted
    /// - `Err(AppError::BadRequest)` - Invalid id
    /// - `Err(AppError::NotFound)` - "Article not found", including repeated deletes
    /// - `Err(AppError::Unauthorized)` - "Article belongs to another user"
    pub async fn delete(&self, article_id: &str, username: &str) -> Result<(), AppError> {
        let article_id = parse_article_id(article_id)?;

        let repo = ArticleRepository::new(self.db);

        let author = repo
            .find_author(article_id)
            .await?
            .ok_or_else(|| AppError::not_found(message::ARTICLE_NOT_FOUND))?;

        if author != username {
            return Err(AppError::unauthorized(
                message::ARTICLE_BELONGS_TO_ANOTHER_USER,
            ));
        }

        if !repo
            .delete_with_comments_if_owned(article_id, username)
            .await?
        {
            return Err(AppError::not_found(message::ARTICLE_NOT_FOUND));
        }

        tracing::info!("Article {} deleted by {}", article_id, username);

        Ok(())
    }

    /// Validates raw listing parameters.
    ///
    /// Precedence: topic existence, then `sort_by`, `order`, `p`, `limit`.
    async fn list_params(
        &self,
        query: ArticleQuery,
        author: Option<String>,
    ) -> Result<ArticleListParams, AppError> {
        let topic = non_empty(query.topic);
        if let Some(slug) = &topic {
            if !TopicRepository::new(self.db).exists(slug).await? {
                return Err(AppError::not_found(message::TOPIC_NOT_FOUND));
            }
        }

        let sort_by = non_empty(query.sort_by)
            .map(|s| s.parse::<ArticleSortBy>())
            .transpose()?
            .unwrap_or_default();

        let order = non_empty(query.order)
            .map(|o| o.parse::<SortOrder>())
            .transpose()?
            .unwrap_or_default();

        let page = non_empty(query.p)
            .map(|p| parse_positive_integer(&p))
            .transpose()?
            .unwrap_or(1);

        let per_page = non_empty(query.limit)
            .map(|l| parse_positive_integer(&l))
            .transpose()?
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .min(MAX_PAGE_SIZE);

        Ok(ArticleListParams {
            filter: ArticleFilter {
                search: non_empty(query.search),
                topic,
                author,
            },
            sort_by,
            order,
            page,
            per_page,
        })
    }

    async fn list(&self, params: ArticleListParams) -> Result<PaginatedArticles, AppError> {
        let (articles, total_count) = ArticleRepository::new(self.db)
            .get_paginated(&params)
            .await?;

        Ok(PaginatedArticles {
            articles,
            total_count,
        })
    }
}
