//! Activity read model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{actor::Actor, object::Object};

/// ActivityPub activity type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityType {
    /// Object created
    Create,
    /// Object edited
    Update,
    /// Object deleted
    Delete,
    /// Follow request
    Follow,
    /// Follow accepted
    Accept,
    /// Follow rejected
    Reject,
    /// Favourite
    Like,
    /// Boost
    Announce,
    /// Reverts an earlier activity
    Undo,
    /// Actor blocked
    Block,
    /// Report
    Flag,
    /// Account migration
    Move,
    /// Type this client does not know yet
    #[serde(other)]
    Unknown,
}

/// An action performed by an actor, such as a like, follow or share.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Activity ID
    pub id: String,
    /// Activity type
    #[serde(rename = "type")]
    pub kind: ActivityType,
    /// Actor that performed it
    pub actor: Actor,
    /// Target object, when it is a note
    #[serde(default)]
    pub object: Option<Object>,
    /// Id of the target when it is not an object (e.g. a followed actor).
    #[serde(default)]
    pub target_id: Option<String>,
    /// Publication time
    pub published: DateTime<Utc>,
    /// Federation cost of this activity in micro-dollars.
    #[serde(default)]
    pub cost: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_follow() {
        let activity: Activity = serde_json::from_value(serde_json::json!({
            "id": "https://social.example/activities/f1",
            "type": "Follow",
            "actor": { "id": "https://social.example/users/alice", "username": "alice" },
            "targetId": "https://remote.example/users/bob",
            "published": "2025-02-01T12:00:00Z",
            "cost": 42
        }))
        .unwrap();

        assert_eq!(activity.kind, ActivityType::Follow);
        assert!(activity.object.is_none());
        assert_eq!(activity.cost, Some(42));
    }

    #[test]
    fn test_unknown_activity_type() {
        let kind: ActivityType = serde_json::from_value(serde_json::json!("EmojiReact")).unwrap();
        assert_eq!(kind, ActivityType::Unknown);
    }
}
