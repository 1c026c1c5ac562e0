//! API layer for HTTP request handling and data models.
//!
//! This module contains the REST API implementation, organized into:
//!
//! - **[`handlers`]**: Axum route handlers for all API endpoints
//! - **[`models`]**: Request/response data structures for API communication
//!
//! # API Structure
//!
//! Every route lives under `/api`:
//!
//! - **Catalog** (`GET /api`): Description of every endpoint
//! - **Topics** (`/api/topics`): List and create topics
//! - **Users** (`/api/users/*`): List users and look one up by username
//! - **Articles** (`/api/articles/*`): List, sort, filter, create, vote on and delete articles
//! - **Comments** (`/api/articles/{article_id}/comments`, `/api/comments/*`): Read, post, vote on
//!   and delete comments
//!
//! Success bodies are wrapped in a single-key envelope (`{"article": ...}`, `{"topics": [...]}`);
//! failures are `{"msg": ...}`.
//!
//! # OpenAPI Documentation
//!
//! All endpoints are documented with OpenAPI annotations using `utoipa`.
//! API documentation is available at `/api/docs` when the server is running.

pub mod handlers;
pub mod models;
