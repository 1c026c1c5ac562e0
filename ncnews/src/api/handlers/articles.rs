use crate::AppState;
use crate::api::handlers::mutations::{delete_existing, patch_votes};
use crate::api::handlers::{parse_id, require};
use crate::api::models::articles::{
    ArticleCreate, ArticleEnvelope, ArticleResponse, ArticleSummaryResponse, ArticlesEnvelope, ListArticlesQuery,
};
use crate::api::models::votes::VoteUpdate;
use crate::db::handlers::{Articles, Repository, Topics, Users};
use crate::db::models::articles::{ArticleCreateDBRequest, ArticleFilter, ArticleVoteDBRequest};
use crate::errors::{Error, ErrorBody, Result};
use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};

#[utoipa::path(
    get,
    path = "/api/articles",
    tag = "articles",
    summary = "List articles",
    params(ListArticlesQuery),
    responses(
        (status = 200, description = "Articles without their bodies", body = ArticlesEnvelope),
        (status = 400, description = "Unknown sort_by or order", body = ErrorBody),
        (status = 404, description = "No articles for the requested topic", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_articles(
    State(state): State<AppState>,
    query: std::result::Result<Query<ListArticlesQuery>, QueryRejection>,
) -> Result<Json<ArticlesEnvelope>> {
    let Query(query) = query?;
    let (sort_by, order) = query.sorting()?;
    let filter = ArticleFilter {
        topic: query.topic,
        sort_by,
        order,
    };

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let articles = Articles::new(&mut conn).list(&filter).await?;

    if let (true, Some(topic)) = (articles.is_empty(), filter.topic) {
        return Err(Error::not_found("Topic", topic));
    }

    Ok(Json(ArticlesEnvelope {
        articles: articles.into_iter().map(ArticleSummaryResponse::from).collect(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/articles",
    tag = "articles",
    summary = "Create article",
    request_body = ArticleCreate,
    responses(
        (status = 201, description = "Article created", body = ArticleEnvelope),
        (status = 400, description = "A required field is missing", body = ErrorBody),
        (status = 404, description = "Author or topic does not exist", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_article(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ArticleCreate>, JsonRejection>,
) -> Result<(StatusCode, Json<ArticleEnvelope>)> {
    const MISSING: &str = "Input invalid, requires author, body, title and topic";
    let Json(payload) = payload?;
    let request = ArticleCreateDBRequest {
        author: require(payload.author, MISSING)?,
        title: require(payload.title, MISSING)?,
        body: require(payload.body, MISSING)?,
        topic: require(payload.topic, MISSING)?,
    };

    let mut tx = state.db.begin().await.map_err(|e| Error::Database(e.into()))?;
    if !Users::new(&mut tx).exists(request.author.clone()).await? {
        return Err(Error::not_found("User", &request.author));
    }
    if !Topics::new(&mut tx).exists(request.topic.clone()).await? {
        return Err(Error::not_found("Topic", &request.topic));
    }
    let article = Articles::new(&mut tx).create(&request).await?;
    tx.commit().await.map_err(|e| Error::Database(e.into()))?;

    Ok((
        StatusCode::CREATED,
        Json(ArticleEnvelope {
            article: ArticleResponse::from(article),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/articles/{article_id}",
    tag = "articles",
    summary = "Get article",
    params(("article_id" = i32, Path, description = "Article ID")),
    responses(
        (status = 200, description = "Article with its comment count", body = ArticleEnvelope),
        (status = 400, description = "article_id is not an integer", body = ErrorBody),
        (status = 404, description = "Article not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn get_article(State(state): State<AppState>, Path(article_id): Path<String>) -> Result<Json<ArticleEnvelope>> {
    let article_id = parse_id("article_id", &article_id)?;

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let article = Articles::new(&mut conn)
        .get_by_id(article_id)
        .await?
        .ok_or_else(|| Error::not_found("Article", article_id))?;

    Ok(Json(ArticleEnvelope {
        article: ArticleResponse::from(article),
    }))
}

#[utoipa::path(
    patch,
    path = "/api/articles/{article_id}",
    tag = "articles",
    summary = "Vote on article",
    params(("article_id" = i32, Path, description = "Article ID")),
    request_body = VoteUpdate,
    responses(
        (status = 200, description = "Updated article", body = ArticleEnvelope),
        (status = 400, description = "Invalid id or inc_votes", body = ErrorBody),
        (status = 404, description = "Article not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn update_article_votes(
    State(state): State<AppState>,
    Path(article_id): Path<String>,
    payload: std::result::Result<Json<VoteUpdate>, JsonRejection>,
) -> Result<Json<ArticleEnvelope>> {
    let article_id = parse_id("article_id", &article_id)?;
    let Json(payload) = payload?;
    let request = ArticleVoteDBRequest {
        inc_votes: payload.delta()?,
    };

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let article = patch_votes(&mut Articles::new(&mut conn), "Article", article_id, &request).await?;

    Ok(Json(ArticleEnvelope {
        article: ArticleResponse::from(article),
    }))
}

#[utoipa::path(
    delete,
    path = "/api/articles/{article_id}",
    tag = "articles",
    summary = "Delete article",
    description = "Deletes the article and every comment on it.",
    params(("article_id" = i32, Path, description = "Article ID")),
    responses(
        (status = 204, description = "Article deleted"),
        (status = 400, description = "article_id is not an integer", body = ErrorBody),
        (status = 404, description = "Article not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn delete_article(State(state): State<AppState>, Path(article_id): Path<String>) -> Result<StatusCode> {
    let article_id = parse_id("article_id", &article_id)?;

    let mut tx = state.db.begin().await.map_err(|e| Error::Database(e.into()))?;
    delete_existing(&mut Articles::new(&mut tx), "Article", article_id).await?;
    tx.commit().await.map_err(|e| Error::Database(e.into()))?;

    Ok(StatusCode::NO_CONTENT)
}
