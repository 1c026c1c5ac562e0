//! Database models for users.

use sqlx::FromRow;

/// Database request for creating a new user.
///
/// Users are read-only through the HTTP API; this is used when loading fixtures.
#[derive(Debug, Clone)]
pub struct UserCreateDBRequest {
    pub username: String,
    pub name: String,
    pub avatar_url: Option<String>,
}

/// Database response for a user
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct UserDBResponse {
    pub username: String,
    pub name: String,
    pub avatar_url: Option<String>,
}
