//! Actor read model and profile input.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A federated account, local or remote.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Actor {
    /// Actor ID (ActivityPub URI)
    pub id: String,
    /// Username without domain
    pub username: String,
    /// Home instance of a remote actor; `None` for local accounts.
    #[serde(default)]
    pub domain: Option<String>,
    /// Display name
    #[serde(default)]
    pub display_name: Option<String>,
    /// Bio (HTML)
    #[serde(default)]
    pub summary: Option<String>,
    /// Avatar URL
    #[serde(default)]
    pub avatar: Option<String>,
    /// Header image URL
    #[serde(default)]
    pub header: Option<String>,
    /// Follower count
    #[serde(default)]
    pub followers: i64,
    /// Following count
    #[serde(default)]
    pub following: i64,
    /// Note count
    #[serde(default)]
    pub statuses_count: i64,
    /// Server-computed reputation in `[0, 100]`.
    #[serde(default)]
    pub trust_score: Option<f64>,
    /// Automated account
    #[serde(default)]
    pub bot: bool,
    /// Follows require approval
    #[serde(default)]
    pub locked: bool,
    /// Profile fields
    #[serde(default)]
    pub fields: Vec<ProfileField>,
    /// Account creation time
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A key/value pair shown on a profile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileField {
    /// Field label
    pub name: String,
    /// Field value (HTML)
    pub value: String,
    /// When the link in `value` was verified
    #[serde(default)]
    pub verified_at: Option<DateTime<Utc>>,
}

impl Actor {
    /// `username@domain` for remote actors, `username` for local ones.
    #[must_use]
    pub fn handle(&self) -> String {
        match &self.domain {
            Some(domain) => format!("{}@{domain}", self.username),
            None => self.username.clone(),
        }
    }

    /// Whether the account lives on another instance.
    #[must_use]
    pub const fn is_remote(&self) -> bool {
        self.domain.is_some()
    }
}

/// Input for `updateProfile`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileInput {
    /// New display name
    #[validate(length(max = 100))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// New bio
    #[validate(length(max = 2000))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// New avatar URL
    #[validate(url)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// New header image URL
    #[validate(url)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
    /// Require follow approval
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
    /// Mark as automated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bot: Option<bool>,
    /// Replacement profile fields
    #[validate(length(max = 16))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<ProfileFieldInput>>,
}

/// A profile field to set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileFieldInput {
    /// Field label
    pub name: String,
    /// Field value
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actor(domain: Option<&str>) -> Actor {
        serde_json::from_value(serde_json::json!({
            "id": "https://social.example/users/alice",
            "username": "alice",
            "domain": domain,
            "followers": 12,
            "following": 3,
            "trustScore": 71.5
        }))
        .unwrap()
    }

    #[test]
    fn test_handle() {
        assert_eq!(actor(None).handle(), "alice");
        assert_eq!(actor(Some("remote.example")).handle(), "alice@remote.example");
        assert!(actor(Some("remote.example")).is_remote());
    }

    #[test]
    fn test_missing_counts_default_to_zero() {
        let a = actor(None);
        assert_eq!(a.statuses_count, 0);
        assert_eq!(a.trust_score, Some(71.5));
        assert!(!a.bot);
    }

    #[test]
    fn test_profile_input_validation() {
        let input = UpdateProfileInput {
            avatar: Some("not a url".to_string()),
            ..Default::default()
        };
        assert!(input.validate().is_err());

        let input = UpdateProfileInput {
            display_name: Some("Alice".to_string()),
            avatar: Some("https://cdn.example/a.png".to_string()),
            ..Default::default()
        };
        assert!(input.validate().is_ok());
    }
}
