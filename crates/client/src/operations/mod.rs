//! Domain operations.
//!
//! Each submodule adds methods to [`FediClient`](crate::FediClient) for one
//! area of the schema, together with the GraphQL documents they send.

pub mod actors;
pub mod conversations;
pub mod cost;
pub mod federation;
pub mod hashtags;
pub mod lists;
pub mod moderation;
pub mod notes;
pub mod notifications;
pub mod search;
pub mod subscriptions;
pub mod timeline;
pub mod trust;

pub use timeline::TimelineKind;

use fedigraph_common::{ClientError, ClientResult};

/// Reject an empty identifier before anything is sent.
pub(crate) fn require(field: &str, value: &str) -> ClientResult<()> {
    if value.trim().is_empty() {
        return Err(ClientError::Validation(format!("{field}: must not be empty")));
    }
    Ok(())
}
