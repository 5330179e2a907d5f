//! Actor lists and their inputs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Which replies a list timeline shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RepliesPolicy {
    /// Replies to anyone the viewer follows
    Followed,
    /// Replies to list members only
    #[default]
    List,
    /// No replies
    None,
}

/// A named list of actors with its own timeline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct List {
    /// List ID
    pub id: String,
    /// List title
    pub title: String,
    /// Which replies show up
    #[serde(default)]
    pub replies_policy: RepliesPolicy,
    /// Members' posts are hidden from the home timeline.
    #[serde(default)]
    pub exclusive: bool,
    /// Member count
    #[serde(default)]
    pub accounts_count: i64,
    /// Creation time
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Last change
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Input for `createList`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateListInput {
    /// List title
    #[validate(length(min = 1, max = 100))]
    pub title: String,
    /// Which replies show up
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replies_policy: Option<RepliesPolicy>,
    /// Hide members from the home timeline
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive: Option<bool>,
}

/// Input for `updateList`. Absent fields are left unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateListInput {
    /// New title
    #[validate(length(min = 1, max = 100))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New replies policy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replies_policy: Option<RepliesPolicy>,
    /// Hide members from the home timeline
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_list_validation() {
        let input = CreateListInput {
            title: String::new(),
            ..Default::default()
        };
        assert!(input.validate().is_err());

        let input = CreateListInput {
            title: "friends".to_string(),
            replies_policy: Some(RepliesPolicy::Followed),
            exclusive: None,
        };
        assert!(input.validate().is_ok());
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            serde_json::json!({ "title": "friends", "repliesPolicy": "FOLLOWED" })
        );
    }
}
