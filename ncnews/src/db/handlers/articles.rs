//! Database repository for articles.
//!
//! Every read joins the live comment rows so `comment_count` is always derived,
//! never stored.

use crate::db::{
    errors::Result,
    handlers::repository::{MutableRepository, Repository},
    models::articles::{ArticleCreateDBRequest, ArticleDBResponse, ArticleFilter, ArticleVoteDBRequest},
};
use crate::types::ArticleId;
use sqlx::PgConnection;
use tracing::instrument;

const SELECT_ARTICLE_WITH_COUNT: &str = r#"
    SELECT articles.article_id, articles.author, articles.title, articles.body, articles.topic,
           articles.created_at, articles.votes,
           COUNT(comments.comment_id)::INT AS comment_count
    FROM articles
    LEFT JOIN comments ON comments.article_id = articles.article_id
"#;

pub struct Articles<'c> {
    db: &'c mut PgConnection,
}

impl<'c> Articles<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl<'c> Repository for Articles<'c> {
    type CreateRequest = ArticleCreateDBRequest;
    type Response = ArticleDBResponse;
    type Id = ArticleId;
    type Filter = ArticleFilter;

    #[instrument(skip(self, request), fields(author = %request.author, topic = %request.topic), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response> {
        // A brand new article has no comments yet
        let article = sqlx::query_as::<_, ArticleDBResponse>(
            r#"
            INSERT INTO articles (author, title, body, topic)
            VALUES ($1, $2, $3, $4)
            RETURNING article_id, author, title, body, topic, created_at, votes, 0::INT AS comment_count
            "#,
        )
        .bind(&request.author)
        .bind(&request.title)
        .bind(&request.body)
        .bind(&request.topic)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(article)
    }

    #[instrument(skip(self), err)]
    async fn get_by_id(&mut self, id: Self::Id) -> Result<Option<Self::Response>> {
        let query = format!("{SELECT_ARTICLE_WITH_COUNT} WHERE articles.article_id = $1 GROUP BY articles.article_id");
        let article = sqlx::query_as::<_, ArticleDBResponse>(&query)
            .bind(id)
            .fetch_optional(&mut *self.db)
            .await?;

        Ok(article)
    }

    #[instrument(skip(self), err)]
    async fn exists(&mut self, id: Self::Id) -> Result<bool> {
        let exists = sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM articles WHERE article_id = $1)")
            .bind(id)
            .fetch_one(&mut *self.db)
            .await?;

        Ok(exists)
    }

    #[instrument(skip(self, filter), fields(topic = ?filter.topic, sort_by = ?filter.sort_by, order = %filter.order), err)]
    async fn list(&mut self, filter: &Self::Filter) -> Result<Vec<Self::Response>> {
        // Column and direction come from closed enums; only the topic is user data and
        // it is bound as a parameter.
        let query = format!(
            "{SELECT_ARTICLE_WITH_COUNT}
             WHERE ($1::VARCHAR IS NULL OR articles.topic = $1)
             GROUP BY articles.article_id
             ORDER BY {column} {order}, articles.article_id {order}",
            column = filter.sort_by.column(),
            order = filter.order.keyword(),
        );

        let articles = sqlx::query_as::<_, ArticleDBResponse>(&query)
            .bind(filter.topic.as_deref())
            .fetch_all(&mut *self.db)
            .await?;

        Ok(articles)
    }
}

#[async_trait::async_trait]
impl<'c> MutableRepository for Articles<'c> {
    type UpdateRequest = ArticleVoteDBRequest;

    #[instrument(skip(self), fields(inc_votes = request.inc_votes), err)]
    async fn update(&mut self, id: Self::Id, request: &Self::UpdateRequest) -> Result<Option<Self::Response>> {
        // Relative update so concurrent votes never overwrite each other
        let article = sqlx::query_as::<_, ArticleDBResponse>(
            r#"
            WITH updated AS (
                UPDATE articles SET votes = votes + $2
                WHERE article_id = $1
                RETURNING article_id, author, title, body, topic, created_at, votes
            )
            SELECT updated.*,
                   (SELECT COUNT(*)::INT FROM comments WHERE comments.article_id = updated.article_id) AS comment_count
            FROM updated
            "#,
        )
        .bind(id)
        .bind(request.inc_votes)
        .fetch_optional(&mut *self.db)
        .await?;

        Ok(article)
    }

    #[instrument(skip(self), err)]
    async fn delete(&mut self, id: Self::Id) -> Result<bool> {
        // Comments go with the article (ON DELETE CASCADE)
        let result = sqlx::query("DELETE FROM articles WHERE article_id = $1")
            .bind(id)
            .execute(&mut *self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
