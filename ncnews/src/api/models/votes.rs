//! Vote adjustment request shared by articles and comments.

use crate::errors::Error;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Request body for `PATCH` on an article or comment.
///
/// `inc_votes` is kept as raw JSON so a missing field, a non-integer and an integer
/// that does not fit in 32 bits each get their own message.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct VoteUpdate {
    /// Amount to add to the current vote count (may be negative)
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<i32>, example = 1)]
    pub inc_votes: Option<serde_json::Value>,
}

/// Wraps any present value, including `null`, so only an absent field is `None`.
fn present<'de, D>(deserializer: D) -> Result<Option<serde_json::Value>, D::Error>
where
    D: Deserializer<'de>,
{
    serde_json::Value::deserialize(deserializer).map(Some)
}

impl VoteUpdate {
    pub fn delta(&self) -> Result<i32, Error> {
        let value = self
            .inc_votes
            .as_ref()
            .ok_or_else(|| Error::bad_request("Input object invalid"))?;

        let delta = match value {
            serde_json::Value::Number(n) if n.is_i64() || n.is_u64() => n.as_i64(),
            _ => return Err(Error::bad_request("inc_votes value should be number")),
        };

        delta
            .and_then(|d| i32::try_from(d).ok())
            .ok_or_else(|| Error::bad_request("inc_votes value out of range"))
    }
}
