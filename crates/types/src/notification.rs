//! Notification read model and filter.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{actor::Actor, object::Object};

/// Notification type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationType {
    /// Mentioned in a note
    Mention,
    /// New follower
    Follow,
    /// Pending follow request
    FollowRequest,
    /// Note favourited
    Like,
    /// Note boosted
    Share,
    /// Note quoted
    Quote,
    /// Poll ended
    Poll,
    /// Followed actor posted
    Status,
    /// Boosted note edited
    Update,
    /// Moderation applied to the viewer
    ModerationAction,
    /// Community note added
    CommunityNote,
    /// Type this client does not know yet
    #[serde(other)]
    Unknown,
}

/// A notification addressed to the authenticated actor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Notification ID
    pub id: String,
    /// Notification type
    #[serde(rename = "type")]
    pub kind: NotificationType,
    /// Actor that caused it
    pub actor: Actor,
    /// Related note
    #[serde(default)]
    pub object: Option<Object>,
    /// Marked read
    #[serde(default)]
    pub read: bool,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

/// Type filter for `notifications`. Empty lists mean "no filter".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationFilter {
    /// Only these types
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<NotificationType>,
    /// Skip these types
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exclude_types: Vec<NotificationType>,
    /// Only from this actor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
}

impl NotificationFilter {
    /// Whether the filter constrains nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty() && self.exclude_types.is_empty() && self.account_id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_serialization() {
        let filter = NotificationFilter {
            types: vec![NotificationType::Mention, NotificationType::FollowRequest],
            ..Default::default()
        };

        assert!(!filter.is_empty());
        assert_eq!(
            serde_json::to_value(&filter).unwrap(),
            serde_json::json!({ "types": ["MENTION", "FOLLOW_REQUEST"] })
        );
        assert!(NotificationFilter::default().is_empty());
    }
}
