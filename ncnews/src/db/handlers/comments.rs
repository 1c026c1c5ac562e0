//! Database repository for comments.

use crate::db::{
    errors::Result,
    handlers::repository::{MutableRepository, Repository},
    models::comments::{CommentCreateDBRequest, CommentDBResponse, CommentFilter, CommentVoteDBRequest},
};
use crate::types::CommentId;
use sqlx::PgConnection;
use tracing::instrument;

pub struct Comments<'c> {
    db: &'c mut PgConnection,
}

impl<'c> Comments<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl<'c> Repository for Comments<'c> {
    type CreateRequest = CommentCreateDBRequest;
    type Response = CommentDBResponse;
    type Id = CommentId;
    type Filter = CommentFilter;

    #[instrument(skip(self, request), fields(article_id = request.article_id, author = %request.author), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response> {
        let comment = sqlx::query_as::<_, CommentDBResponse>(
            r#"
            INSERT INTO comments (article_id, author, body)
            VALUES ($1, $2, $3)
            RETURNING comment_id, article_id, author, body, votes, created_at
            "#,
        )
        .bind(request.article_id)
        .bind(&request.author)
        .bind(&request.body)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(comment)
    }

    #[instrument(skip(self), err)]
    async fn get_by_id(&mut self, id: Self::Id) -> Result<Option<Self::Response>> {
        let comment = sqlx::query_as::<_, CommentDBResponse>(
            "SELECT comment_id, article_id, author, body, votes, created_at FROM comments WHERE comment_id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *self.db)
        .await?;

        Ok(comment)
    }

    #[instrument(skip(self, filter), fields(article_id = filter.article_id), err)]
    async fn list(&mut self, filter: &Self::Filter) -> Result<Vec<Self::Response>> {
        let comments = sqlx::query_as::<_, CommentDBResponse>(
            r#"
            SELECT comment_id, article_id, author, body, votes, created_at
            FROM comments
            WHERE article_id = $1
            ORDER BY created_at DESC, comment_id DESC
            "#,
        )
        .bind(filter.article_id)
        .fetch_all(&mut *self.db)
        .await?;

        Ok(comments)
    }
}

#[async_trait::async_trait]
impl<'c> MutableRepository for Comments<'c> {
    type UpdateRequest = CommentVoteDBRequest;

    #[instrument(skip(self), fields(inc_votes = request.inc_votes), err)]
    async fn update(&mut self, id: Self::Id, request: &Self::UpdateRequest) -> Result<Option<Self::Response>> {
        let comment = sqlx::query_as::<_, CommentDBResponse>(
            r#"
            UPDATE comments SET votes = votes + $2
            WHERE comment_id = $1
            RETURNING comment_id, article_id, author, body, votes, created_at
            "#,
        )
        .bind(id)
        .bind(request.inc_votes)
        .fetch_optional(&mut *self.db)
        .await?;

        Ok(comment)
    }

    #[instrument(skip(self), err)]
    async fn delete(&mut self, id: Self::Id) -> Result<bool> {
        let result = sqlx::query("DELETE FROM comments WHERE comment_id = $1")
            .bind(id)
            .execute(&mut *self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
