//! Vote and delete flows shared by articles and comments.
//!
//! Both run against a repository borrowed from the caller, so the caller decides
//! whether they share a transaction with other work.

use crate::db::errors::DbError;
use crate::db::handlers::MutableRepository;
use crate::errors::{Error, Result};
use std::fmt::Display;

/// Apply a relative vote change, failing with `<resource> <id> not found` for an unknown id.
///
/// A change that would take the stored count outside the 32-bit column range is rejected
/// like an out-of-range `inc_votes`.
pub async fn patch_votes<R>(repo: &mut R, resource: &str, id: R::Id, request: &R::UpdateRequest) -> Result<R::Response>
where
    R: MutableRepository + Send,
    R::Id: Display + Clone,
{
    match repo.update(id.clone(), request).await {
        Ok(Some(updated)) => Ok(updated),
        Ok(None) => Err(Error::not_found(resource, id)),
        Err(DbError::NumericOutOfRange { .. }) => Err(Error::bad_request("inc_votes value out of range")),
        Err(e) => Err(e.into()),
    }
}

/// Check that the entity exists, then delete it.
///
/// Callers pass a repository over an open transaction. A delete that removes no rows
/// still reports `<resource> <id> not found`.
pub async fn delete_existing<R>(repo: &mut R, resource: &str, id: R::Id) -> Result<()>
where
    R: MutableRepository + Send,
    R::Id: Display + Clone,
{
    if !repo.exists(id.clone()).await? {
        return Err(Error::not_found(resource, id));
    }
    // A concurrent delete can win between the check and the delete
    if !repo.delete(id.clone()).await? {
        return Err(Error::not_found(resource, id));
    }
    Ok(())
}
