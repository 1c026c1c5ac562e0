//! HTTP request handlers for all API endpoints.
//!
//! This module contains Axum route handlers organized by resource type.
//! Each handler is responsible for:
//! - Path, query and body validation
//! - Existence checks on referenced rows
//! - Calling the database repositories
//! - Wrapping results in their JSON envelope
//!
//! # Handler Modules
//!
//! - [`articles`]: article listing, lookup, creation, votes and deletion
//! - [`comments`]: comments on an article, comment votes and deletion
//! - [`endpoints`]: the `GET /api` endpoint catalog
//! - [`mutations`]: vote and delete flows shared by articles and comments
//! - [`topics`]: topic listing and creation
//! - [`users`]: user listing and lookup
//!
//! # Error Handling
//!
//! Handlers return [`crate::errors::Error`], which converts to the matching HTTP
//! status code and a `{"msg": ...}` JSON body.

pub mod articles;
pub mod comments;
pub mod endpoints;
pub mod mutations;
pub mod topics;
pub mod users;

use crate::errors::{Error, Result};

/// Parse an integer id taken from the URL path.
pub(crate) fn parse_id(name: &str, raw: &str) -> Result<i32> {
    raw.parse().map_err(|_| Error::bad_request(format!("Invalid {name}: {raw}")))
}

/// Pull a required field out of a request body, naming every required field on failure.
pub(crate) fn require<T>(field: Option<T>, message: &str) -> Result<T> {
    field.ok_or_else(|| Error::bad_request(message))
}
