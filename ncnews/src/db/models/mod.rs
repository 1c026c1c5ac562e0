//! Database record models matching table schemas.
//!
//! These structs correspond to table rows (plus derived columns such as an article's
//! `comment_count`). Repositories return them from queries and accept the `*DBRequest`
//! types for writes.
//!
//! Database models are kept separate from the API models in [`crate::api::models`]
//! so the storage and wire representations can evolve independently; the API layer
//! converts between them with `From` impls.

pub mod articles;
pub mod comments;
pub mod topics;
pub mod users;
