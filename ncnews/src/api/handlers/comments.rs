use crate::AppState;
use crate::api::handlers::mutations::{delete_existing, patch_votes};
use crate::api::handlers::{parse_id, require};
use crate::api::models::comments::{CommentCreate, CommentEnvelope, CommentResponse, CommentsEnvelope};
use crate::api::models::votes::VoteUpdate;
use crate::db::handlers::{Articles, Comments, Repository, Users};
use crate::db::models::comments::{CommentCreateDBRequest, CommentFilter, CommentVoteDBRequest};
use crate::errors::{Error, ErrorBody, Result};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};

#[utoipa::path(
    get,
    path = "/api/articles/{article_id}/comments",
    tag = "comments",
    summary = "List comments on article",
    params(("article_id" = i32, Path, description = "Article ID")),
    responses(
        (status = 200, description = "Comments, newest first", body = CommentsEnvelope),
        (status = 400, description = "article_id is not an integer", body = ErrorBody),
        (status = 404, description = "Article not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_comments(State(state): State<AppState>, Path(article_id): Path<String>) -> Result<Json<CommentsEnvelope>> {
    let article_id = parse_id("article_id", &article_id)?;

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    if !Articles::new(&mut conn).exists(article_id).await? {
        return Err(Error::not_found("Article", article_id));
    }
    let comments = Comments::new(&mut conn).list(&CommentFilter::for_article(article_id)).await?;

    if comments.is_empty() && state.config.compat.empty_comments_not_found {
        return Err(Error::EmptyCollection {
            resource: "comments".to_string(),
        });
    }

    Ok(Json(CommentsEnvelope {
        comments: comments.into_iter().map(CommentResponse::from).collect(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/articles/{article_id}/comments",
    tag = "comments",
    summary = "Comment on article",
    params(("article_id" = i32, Path, description = "Article ID")),
    request_body = CommentCreate,
    responses(
        (status = 201, description = "Comment created", body = CommentEnvelope),
        (status = 400, description = "Invalid id or missing username/body", body = ErrorBody),
        (status = 404, description = "User or article not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_comment(
    State(state): State<AppState>,
    Path(article_id): Path<String>,
    payload: std::result::Result<Json<CommentCreate>, JsonRejection>,
) -> Result<(StatusCode, Json<CommentEnvelope>)> {
    const MISSING: &str = "Input invalid, requires username and body";
    let article_id = parse_id("article_id", &article_id)?;
    let Json(payload) = payload?;
    let request = CommentCreateDBRequest {
        article_id,
        author: require(payload.username, MISSING)?,
        body: require(payload.body, MISSING)?,
    };

    let mut tx = state.db.begin().await.map_err(|e| Error::Database(e.into()))?;
    if !Users::new(&mut tx).exists(request.author.clone()).await? {
        return Err(Error::not_found("User", &request.author));
    }
    if !Articles::new(&mut tx).exists(article_id).await? {
        return Err(Error::not_found("Article", article_id));
    }
    let comment = Comments::new(&mut tx).create(&request).await?;
    tx.commit().await.map_err(|e| Error::Database(e.into()))?;

    Ok((
        StatusCode::CREATED,
        Json(CommentEnvelope {
            comment: CommentResponse::from(comment),
        }),
    ))
}

#[utoipa::path(
    patch,
    path = "/api/comments/{comment_id}",
    tag = "comments",
    summary = "Vote on comment",
    params(("comment_id" = i32, Path, description = "Comment ID")),
    request_body = VoteUpdate,
    responses(
        (status = 200, description = "Updated comment", body = CommentEnvelope),
        (status = 400, description = "Invalid id or inc_votes", body = ErrorBody),
        (status = 404, description = "Comment not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn update_comment_votes(
    State(state): State<AppState>,
    Path(comment_id): Path<String>,
    payload: std::result::Result<Json<VoteUpdate>, JsonRejection>,
) -> Result<Json<CommentEnvelope>> {
    let comment_id = parse_id("comment_id", &comment_id)?;
    let Json(payload) = payload?;
    let request = CommentVoteDBRequest {
        inc_votes: payload.delta()?,
    };

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let comment = patch_votes(&mut Comments::new(&mut conn), "Comment", comment_id, &request).await?;

    Ok(Json(CommentEnvelope {
        comment: CommentResponse::from(comment),
    }))
}

#[utoipa::path(
    delete,
    path = "/api/comments/{comment_id}",
    tag = "comments",
    summary = "Delete comment",
    params(("comment_id" = i32, Path, description = "Comment ID")),
    responses(
        (status = 204, description = "Comment deleted"),
        (status = 400, description = "comment_id is not an integer", body = ErrorBody),
        (status = 404, description = "Comment not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn delete_comment(State(state): State<AppState>, Path(comment_id): Path<String>) -> Result<StatusCode> {
    let comment_id = parse_id("comment_id", &comment_id)?;

    let mut tx = state.db.begin().await.map_err(|e| Error::Database(e.into()))?;
    delete_existing(&mut Comments::new(&mut tx), "Comment", comment_id).await?;
    tx.commit().await.map_err(|e| Error::Database(e.into()))?;

    Ok(StatusCode::NO_CONTENT)
}
