//! Relationship between the viewer and another actor.

use serde::{Deserialize, Serialize};

/// Edge state between the authenticated actor and `id`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Relationship {
    /// Other actor ID
    pub id: String,
    /// Viewer follows them
    pub following: bool,
    /// They follow the viewer
    pub followed_by: bool,
    /// Viewer blocks them
    pub blocking: bool,
    /// They block the viewer
    pub blocked_by: bool,
    /// Viewer mutes them
    pub muting: bool,
    /// Mute covers notifications
    pub muting_notifications: bool,
    /// A follow request is pending approval.
    pub requested: bool,
    /// Viewer blocks their domain
    pub domain_blocking: bool,
    /// Viewer's private note on them
    pub note: Option<String>,
}

impl Relationship {
    /// Both actors follow each other.
    #[must_use]
    pub const fn is_mutual(&self) -> bool {
        self.following && self.followed_by
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_payload_defaults() {
        let rel: Relationship = serde_json::from_value(serde_json::json!({
            "id": "bob",
            "following": true,
            "followedBy": true
        }))
        .unwrap();

        assert!(rel.is_mutual());
        assert!(!rel.blocking);
        assert!(rel.note.is_none());
    }
}
