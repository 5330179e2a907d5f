//! Trust scores.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Dimension a trust score applies to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrustCategory {
    /// Quality of posted content
    #[default]
    Content,
    /// Conduct toward others
    Behavior,
    /// Protocol and instance reliability
    Technical,
}

/// Trust the viewer's instance places in an actor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrustScore {
    /// Scored actor
    pub actor_id: String,
    /// Score category
    pub category: TrustCategory,
    /// Score in `[0, 100]`.
    pub score: f64,
    /// Confidence in `[0, 1]`
    #[serde(default)]
    pub confidence: Option<f64>,
    /// Last recomputed
    pub updated_at: DateTime<Utc>,
}

/// Pushed when an actor's trust score changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrustUpdate {
    /// Scored actor
    pub actor_id: String,
    /// Score category
    pub category: TrustCategory,
    /// Score before
    pub previous_score: f64,
    /// Score after
    pub new_score: f64,
    /// Why it changed
    #[serde(default)]
    pub reason: Option<String>,
    /// Changed at
    pub updated_at: DateTime<Utc>,
}

impl TrustUpdate {
    /// Signed change in score.
    #[must_use]
    pub fn delta(&self) -> f64 {
        self.new_score - self.previous_score
    }
}

/// Input for `updateTrust`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TrustInput {
    /// Actor being rated
    #[validate(length(min = 1))]
    pub target_actor_id: String,
    /// Score category
    pub category: TrustCategory,
    /// Rating in `[0, 100]`
    #[validate(range(min = 0.0, max = 100.0))]
    pub score: f64,
    /// Free-form justification
    #[validate(length(max = 500))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}
