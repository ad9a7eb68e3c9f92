//! Article data repository.
//!
//! Builds the listing query from typed parts: filters become bound predicates in a
//! `Condition`, and the sort key is resolved from `ArticleSortBy` to a fixed column
//! expression. The comment count is always an aggregate over a `LEFT JOIN` on comments
//! and is never stored.

use sea_orm::{
    sea_query::{Expr, SimpleExpr},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection,
    DbErr, EntityTrait, FromQueryResult, IntoSimpleExpr, Iterable, JoinType, Order,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, TransactionTrait,
};

use crate::server::model::article::{
    Article, ArticleFilter, ArticleListParams, ArticleSortBy, ArticleSummary, NewArticle,
    SortOrder, VoteUpdate,
};

use entity::article::Column as ArticleColumn;

const COMMENT_COUNT: &str = "comment_count";

/// Columns a search term is matched against.
const SEARCH_COLUMNS: [ArticleColumn; 4] = [
    ArticleColumn::Title,
    ArticleColumn::Body,
    ArticleColumn::Topic,
    ArticleColumn::Author,
];

/// Columns projected by the listing. The listing groups by all of them.
const SUMMARY_COLUMNS: [ArticleColumn; 7] = [
    ArticleColumn::Author,
    ArticleColumn::Title,
    ArticleColumn::ArticleId,
    ArticleColumn::Topic,
    ArticleColumn::CreatedAt,
    ArticleColumn::Votes,
    ArticleColumn::ArticleImgUrl,
];

#[derive(Debug, FromQueryResult)]
struct ArticleSummaryRow {
    article_id: i32,
    author: String,
    title: String,
    topic: String,
    created_at: chrono::DateTime<chrono::Utc>,
    votes: i32,
    article_img_url: String,
    comment_count: i64,
}

impl From<ArticleSummaryRow> for ArticleSummary {
    fn from(row: ArticleSummaryRow) -> Self {
        Self {
            article_id: row.article_id,
            author: row.author,
            title: row.title,
            topic: row.topic,
            created_at: row.created_at,
            votes: row.votes,
            article_img_url: row.article_img_url,
            comment_count: row.comment_count.max(0) as u64,
        }
    }
}

#[derive(Debug, FromQueryResult)]
struct ArticleRow {
    article_id: i32,
    author: String,
    title: String,
    body: String,
    topic: String,
    created_at: chrono::DateTime<chrono::Utc>,
    votes: i32,
    article_img_url: String,
    comment_count: i64,
}

impl From<ArticleRow> for Article {
    fn from(row: ArticleRow) -> Self {
        Self {
            article_id: row.article_id,
            author: row.author,
            title: row.title,
            body: row.body,
            topic: row.topic,
            created_at: row.created_at,
            votes: row.votes,
            article_img_url: row.article_img_url,
            comment_count: row.comment_count.max(0) as u64,
        }
    }
}

/// Escapes LIKE metacharacters so a search term only ever matches literally.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Raw expression builders. `ExprTrait` is only imported here, away from `ColumnTrait` calls.
mod expr {
    use sea_orm::sea_query::{Expr, ExprTrait, Func, SimpleExpr};

    use super::ArticleColumn;

    /// `LOWER(articles.<column>) LIKE LOWER(<pattern>) ESCAPE '\'`
    ///
    /// Column and term are folded by the same `LOWER`.
    pub(super) fn lower_like(column: ArticleColumn, pattern: &str) -> SimpleExpr {
        let lowered_column: SimpleExpr =
            Func::lower(Expr::col((entity::article::Entity, column))).into();
        let lowered_pattern: SimpleExpr = Func::lower(Expr::val(pattern)).into();

        Expr::cust_with_exprs("$1 LIKE $2 ESCAPE '\\'", [lowered_column, lowered_pattern])
    }

    /// `votes + delta`
    pub(super) fn votes_plus(delta: i32) -> SimpleExpr {
        Expr::col(ArticleColumn::Votes).add(delta)
    }
}

fn comment_count_expr() -> SimpleExpr {
    entity::comment::Column::CommentId.count()
}

/// Resolves a sort key to its column expression.
fn sort_expr(sort_by: ArticleSortBy) -> SimpleExpr {
    match sort_by {
        ArticleSortBy::Title => ArticleColumn::Title.into_simple_expr(),
        ArticleSortBy::Topic => ArticleColumn::Topic.into_simple_expr(),
        ArticleSortBy::Author => ArticleColumn::Author.into_simple_expr(),
        ArticleSortBy::CreatedAt => ArticleColumn::CreatedAt.into_simple_expr(),
        ArticleSortBy::Votes => ArticleColumn::Votes.into_simple_expr(),
        ArticleSortBy::CommentCount => comment_count_expr(),
        ArticleSortBy::ArticleId => ArticleColumn::ArticleId.into_simple_expr(),
    }
}

fn sort_order(order: SortOrder) -> Order {
    match order {
        SortOrder::Asc => Order::Asc,
        SortOrder::Desc => Order::Desc,
    }
}

/// Builds the WHERE clause shared by the page query and the total count.
///
/// Search terms are OR-combined across `SEARCH_COLUMNS`; the topic and author filters
/// are AND-combined with that group.
fn filter_condition(filter: &ArticleFilter) -> Condition {
    let mut condition = Condition::all();

    if let Some(term) = &filter.search {
        let pattern = format!("%{}%", escape_like(term));
        let any_column = SEARCH_COLUMNS
            .iter()
            .fold(Condition::any(), |any, column| {
                any.add(expr::lower_like(*column, &pattern))
            });
        condition = condition.add(any_column);
    }

    if let Some(topic) = &filter.topic {
        condition = condition.add(ArticleColumn::Topic.eq(topic.as_str()));
    }

    if let Some(author) = &filter.author {
        condition = condition.add(ArticleColumn::Author.eq(author.as_str()));
    }

    condition
}

/// Selects a single article with every column plus its comment count.
async fn find_with_comment_count<C: ConnectionTrait>(
    conn: &C,
    article_id: i32,
) -> Result<Option<Article>, DbErr> {
    let mut query = entity::prelude::Article::find()
        .column_as(comment_count_expr(), COMMENT_COUNT)
        .join(JoinType::LeftJoin, entity::article::Relation::Comment.def())
        .filter(ArticleColumn::ArticleId.eq(article_id));

    for column in ArticleColumn::iter() {
        query = query.group_by(column);
    }

    let row = query.into_model::<ArticleRow>().one(conn).await?;

    Ok(row.map(Article::from))
}

/// Repository providing database operations for articles.
pub struct ArticleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ArticleRepository<'a> {
    /// Creates a new ArticleRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of article summaries and the total number of matching rows.
    ///
    /// Ties on the sort key are broken by ascending article id.
    ///
    /// # Arguments
    /// - `params` - Validated filter, sort and page parameters
    ///
    /// # Returns
    /// - `Ok((articles, total_count))` - The page and the filter-wide row count
    /// - `Err(DbErr)` - Database error during either query
    pub async fn get_paginated(
        &self,
        params: &ArticleListParams,
    ) -> Result<(Vec<ArticleSummary>, u64), DbErr> {
        let condition = filter_condition(&params.filter);

        let mut query = entity::prelude::Article::find()
            .select_only()
            .columns(SUMMARY_COLUMNS)
            .column_as(comment_count_expr(), COMMENT_COUNT)
            .join(JoinType::LeftJoin, entity::article::Relation::Comment.def())
            .filter(condition.clone());

        for column in SUMMARY_COLUMNS {
            query = query.group_by(column);
        }

        let articles = query
            .order_by(sort_expr(params.sort_by), sort_order(params.order))
            .order_by(ArticleColumn::ArticleId, Order::Asc)
            .limit(params.per_page)
            .offset(params.offset())
            .into_model::<ArticleSummaryRow>()
            .all(self.db)
            .await?
            .into_iter()
            .map(ArticleSummary::from)
            .collect();

        let total_count = entity::prelude::Article::find()
            .filter(condition)
            .count(self.db)
            .await?;

        Ok((articles, total_count))
    }

    /// Gets an article by id together with its live comment count.
    ///
    /// # Returns
    /// - `Ok(Some(Article))` - Article found
    /// - `Ok(None)` - No article with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, article_id: i32) -> Result<Option<Article>, DbErr> {
        find_with_comment_count(self.db, article_id).await
    }

    /// Gets the author of an article without loading the rest of the row.
    pub async fn find_author(&self, article_id: i32) -> Result<Option<String>, DbErr> {
        let article = entity::prelude::Article::find_by_id(article_id)
            .one(self.db)
            .await?;

        Ok(article.map(|a| a.author))
    }

    /// Checks whether an article exists.
    pub async fn exists(&self, article_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Article::find()
            .filter(ArticleColumn::ArticleId.eq(article_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Adds `delta` to an article's votes in a single statement and returns the result.
    ///
    /// The arithmetic happens in the database (`votes = votes + delta`) so concurrent
    /// increments cannot overwrite one another. The statement only matches rows whose
    /// current votes leave room for `delta` in an `i32`.
    ///
    /// # Returns
    /// - `Ok(VoteUpdate::Applied(Article))` - Updated article with its comment count
    /// - `Ok(VoteUpdate::NotFound)` - No article with that id
    /// - `Ok(VoteUpdate::OutOfRange)` - The total would overflow; votes are unchanged
    /// - `Err(DbErr)` - Database error during update or re-read
    pub async fn increment_votes(
        &self,
        article_id: i32,
        delta: i32,
    ) -> Result<VoteUpdate, DbErr> {
        let txn = self.db.begin().await?;

        let headroom = if delta >= 0 {
            ArticleColumn::Votes.lte(i32::MAX - delta)
        } else {
            ArticleColumn::Votes.gte(i32::MIN - delta)
        };

        let result = entity::prelude::Article::update_many()
            .col_expr(ArticleColumn::Votes, expr::votes_plus(delta))
            .filter(ArticleColumn::ArticleId.eq(article_id))
            .filter(headroom)
            .exec(&txn)
            .await?;

        if result.rows_affected == 0 {
            let exists = entity::prelude::Article::find_by_id(article_id)
                .one(&txn)
                .await?
                .is_some();
            txn.rollback().await?;

            return Ok(if exists {
                VoteUpdate::OutOfRange
            } else {
                VoteUpdate::NotFound
            });
        }

        let article = find_with_comment_count(&txn, article_id).await?;

        txn.commit().await?;

        Ok(article.map_or(VoteUpdate::NotFound, VoteUpdate::Applied))
    }

    /// Inserts a new article.
    ///
    /// The database assigns the id, the creation timestamp and the initial vote count.
    /// A new article cannot have comments yet, so its count is set to zero without a query.
    pub async fn create(&self, new_article: NewArticle) -> Result<Article, DbErr> {
        let article = entity::article::ActiveModel {
            author: ActiveValue::Set(new_article.author),
            title: ActiveValue::Set(new_article.title),
            body: ActiveValue::Set(new_article.body),
            topic: ActiveValue::Set(new_article.topic),
            article_img_url: ActiveValue::Set(new_article.article_img_url),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Article::from_entity(article, 0))
    }

    /// Replaces an article's body if, and only if, it is owned by `author`.
    ///
    /// Expressed as `UPDATE ... WHERE article_id = ? AND author = ?` so ownership is
    /// re-checked by the same statement that writes.
    ///
    /// # Returns
    /// - `Ok(Some(entity::article::Model))` - Updated row
    /// - `Ok(None)` - No row with that id owned by `author`
    /// - `Err(DbErr)` - Database error
    pub async fn update_body_if_owned(
        &self,
        article_id: i32,
        author: &str,
        body: String,
    ) -> Result<Option<entity::article::Model>, DbErr> {
        let txn = self.db.begin().await?;

        let result = entity::prelude::Article::update_many()
            .col_expr(ArticleColumn::Body, Expr::value(body))
            .filter(ArticleColumn::ArticleId.eq(article_id))
            .filter(ArticleColumn::Author.eq(author))
            .exec(&txn)
            .await?;

        if result.rows_affected == 0 {
            txn.rollback().await?;
            return Ok(None);
        }

        let article = entity::prelude::Article::find_by_id(article_id)
            .one(&txn)
            .await?;

        txn.commit().await?;

        Ok(article)
    }

    /// Deletes an article owned by `author` together with all of its comments.
    ///
    /// Comments are removed first, inside the same transaction, so the delete succeeds
    /// whether or not the store cascades the foreign key.
    ///
    /// # Returns
    /// - `Ok(true)` - Article and its comments deleted
    /// - `Ok(false)` - No article with that id owned by `author`; nothing was changed
    /// - `Err(DbErr)` - Database error
    pub async fn delete_with_comments_if_owned(
        &self,
        article_id: i32,
        author: &str,
    ) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        let owned = entity::prelude::Article::find()
            .filter(ArticleColumn::ArticleId.eq(article_id))
            .filter(ArticleColumn::Author.eq(author))
            .count(&txn)
            .await?
            > 0;

        if !owned {
            txn.rollback().await?;
            return Ok(false);
        }

        entity::prelude::Comment::delete_many()
            .filter(entity::comment::Column::ArticleId.eq(article_id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::Article::delete_many()
            .filter(ArticleColumn::ArticleId.eq(article_id))
            .filter(ArticleColumn::Author.eq(author))
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }
}
