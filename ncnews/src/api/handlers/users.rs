use crate::AppState;
use crate::api::models::users::{UserEnvelope, UserResponse, UserSummaryResponse, UsersEnvelope};
use crate::db::handlers::{Repository, Users};
use crate::errors::{Error, ErrorBody, Result};
use axum::{
    Json,
    extract::{Path, State},
};

#[utoipa::path(
    get,
    path = "/api/users",
    tag = "users",
    summary = "List users",
    responses(
        (status = 200, description = "All usernames, sorted", body = UsersEnvelope),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<UsersEnvelope>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let users = Users::new(&mut conn).list(&()).await?;

    Ok(Json(UsersEnvelope {
        users: users.into_iter().map(UserSummaryResponse::from).collect(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/users/{username}",
    tag = "users",
    summary = "Get user",
    params(("username" = String, Path, description = "Username")),
    responses(
        (status = 200, description = "User profile", body = UserEnvelope),
        (status = 404, description = "User not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn get_user(State(state): State<AppState>, Path(username): Path<String>) -> Result<Json<UserEnvelope>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let user = Users::new(&mut conn)
        .get_by_id(username.clone())
        .await?
        .ok_or_else(|| Error::not_found("User", &username))?;

    Ok(Json(UserEnvelope {
        user: UserResponse::from(user),
    }))
}
