//! Hashtag read model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A hashtag with usage statistics.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hashtag {
    /// Tag name without the leading `#`.
    pub name: String,
    /// Tag page URL
    #[serde(default)]
    pub url: Option<String>,
    /// Name with original casing
    #[serde(default)]
    pub display_name: Option<String>,
    /// Total uses
    #[serde(default)]
    pub usage_count: i64,
    /// Viewer follows the tag
    #[serde(default)]
    pub is_following: bool,
    /// Position on the trending list, when trending.
    #[serde(default)]
    pub trending_rank: Option<i32>,
    /// Recent daily usage
    #[serde(default)]
    pub history: Vec<HashtagUsage>,
}

/// Daily usage of a hashtag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HashtagUsage {
    /// Day
    pub day: NaiveDate,
    /// Notes using the tag
    pub uses: i64,
    /// Distinct authors
    pub accounts: i64,
}

/// Strip a leading `#` and surrounding whitespace from a tag name.
#[must_use]
pub fn normalize_tag(name: &str) -> &str {
    name.trim().trim_start_matches('#').trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_tag() {
        assert_eq!(normalize_tag("#rust"), "rust");
        assert_eq!(normalize_tag("  rust "), "rust");
        assert_eq!(normalize_tag("##rust"), "rust");
        assert_eq!(normalize_tag("# rust"), "rust");
        assert_eq!(normalize_tag("#  "), "");
    }

    #[test]
    fn test_deserialize_history() {
        let tag: Hashtag = serde_json::from_value(serde_json::json!({
            "name": "rust",
            "usageCount": 120,
            "trendingRank": 3,
            "history": [{ "day": "2025-03-01", "uses": 40, "accounts": 22 }]
        }))
        .unwrap();

        assert_eq!(tag.trending_rank, Some(3));
        assert_eq!(tag.history[0].uses, 40);
        assert!(!tag.is_following);
    }
}
