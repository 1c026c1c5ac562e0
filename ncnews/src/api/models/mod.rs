//! API request and response models.
//!
//! Request bodies use `Option` fields so a missing field reaches the handler, which
//! answers with a message naming the required fields instead of a serde rejection.
//! Responses are wrapped in single-key envelopes (`{"article": {...}}`,
//! `{"comments": [...]}`) and converted from the database models with `From` impls.

pub mod articles;
pub mod comments;
pub mod topics;
pub mod users;
pub mod votes;
