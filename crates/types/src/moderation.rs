//! Moderation artifacts: reports, community notes, patterns, AI analysis
//! and pushed moderation events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{actor::Actor, object::Object};

/// Severity shared by moderation alerts, patterns and performance alerts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    /// Informational
    Info,
    /// Low
    #[default]
    Low,
    /// Medium
    Medium,
    /// High
    High,
    /// Critical
    Critical,
}

/// Action the moderation pipeline recommends or took.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ModerationAction {
    /// No action
    None,
    /// Flag for review
    Flag,
    /// Hide from timelines
    Hide,
    /// Delete the content
    Remove,
    /// Queue for a moderator
    Review,
    /// Visible to the author only
    Shadow,
    /// Suspend the author
    Suspend,
    /// Action this client does not know yet
    #[serde(other)]
    Unknown,
}

/// Result of `flagObject`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModerationReport {
    /// Report ID
    pub id: String,
    /// Reported object
    pub object_id: String,
    /// Reporter's reason
    pub reason: String,
    /// Review status
    #[serde(default)]
    pub status: Option<String>,
    /// Filed at
    pub created_at: DateTime<Utc>,
}

/// Input for `flagObject`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FlagInput {
    /// Object to report
    #[validate(length(min = 1))]
    pub object_id: String,
    /// Why it is reported
    #[validate(length(min = 1, max = 2000))]
    pub reason: String,
    /// Supporting URLs
    #[validate(length(max = 10))]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub evidence: Vec<String>,
}

/// A crowd-sourced annotation on an object.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityNote {
    /// Note ID
    pub id: String,
    /// Author
    pub author: Actor,
    /// Note text
    pub content: String,
    /// Helpful votes
    #[serde(default)]
    pub helpful: i64,
    /// Not helpful votes
    #[serde(default)]
    pub not_helpful: i64,
    /// Server-computed helpfulness score.
    #[serde(default)]
    pub score: f64,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

/// Input for `addCommunityNote`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CommunityNoteInput {
    /// Object the note annotates
    #[validate(length(min = 1))]
    pub object_id: String,
    /// Note text
    #[validate(length(min = 1, max = 1000))]
    pub content: String,
    /// Source URLs
    #[validate(length(max = 10))]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<String>,
}

/// How a moderation pattern is matched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PatternKind {
    /// Regular expression
    Regex,
    /// Single word
    Keyword,
    /// Exact phrase
    Phrase,
    /// Model-backed classifier
    MlPattern,
}

/// A server-side content-matching rule.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModerationPattern {
    /// Pattern ID
    pub id: String,
    /// Pattern source
    pub pattern: String,
    /// How `pattern` is matched
    #[serde(rename = "type")]
    pub kind: PatternKind,
    /// Severity of a match
    pub severity: Severity,
    /// Pattern is applied
    #[serde(default)]
    pub active: bool,
    /// Matches so far
    #[serde(default)]
    pub match_count: i64,
    /// Share of matches overturned
    #[serde(default)]
    pub false_positive_rate: Option<f64>,
    /// Moderator who added it
    #[serde(default)]
    pub created_by: Option<Actor>,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last change
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Input for `createModerationPattern` and `updateModerationPattern`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ModerationPatternInput {
    /// Pattern source
    #[validate(length(min = 1, max = 1000))]
    pub pattern: String,
    /// How `pattern` is matched
    #[serde(rename = "type")]
    pub kind: PatternKind,
    /// Severity of a match
    pub severity: Severity,
    /// Apply the pattern
    pub active: bool,
}

/// Text signals from AI analysis.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextAnalysis {
    /// Sentiment label, e.g. `POSITIVE`
    pub sentiment: Option<String>,
    /// Toxicity in `[0, 1]`
    pub toxicity: f64,
    /// Spam likelihood in `[0, 1]`
    pub spam_score: f64,
    /// Detected language code
    pub dominant_language: Option<String>,
    /// Personal data found
    pub pii_detected: bool,
}

/// Server-side AI analysis of an object.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiAnalysis {
    /// Analysis ID
    pub id: String,
    /// Analysed object
    pub object_id: String,
    /// Analysed object type
    #[serde(default)]
    pub object_type: Option<String>,
    /// Combined risk in `[0, 1]`.
    pub overall_risk: f64,
    /// Text signals
    #[serde(default)]
    pub text_analysis: Option<TextAnalysis>,
    /// Suggested action
    pub moderation_action: ModerationAction,
    /// Confidence in `[0, 1]`
    pub confidence: f64,
    /// Analysis time
    pub analyzed_at: DateTime<Utc>,
}

/// Pushed when a pattern or the AI pipeline flags content.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModerationAlert {
    /// Alert ID
    pub id: String,
    /// Alert severity
    pub severity: Severity,
    /// Pattern that matched
    #[serde(default)]
    pub pattern_id: Option<String>,
    /// Text that matched
    #[serde(default)]
    pub matched_text: Option<String>,
    /// Object that matched
    #[serde(default)]
    pub object: Option<Object>,
    /// Suggested action
    pub suggested_action: ModerationAction,
    /// Confidence in `[0, 1]`
    pub confidence: f64,
    /// A moderator acted on it
    #[serde(default)]
    pub handled: bool,
    /// Raised at
    pub created_at: DateTime<Utc>,
}

/// Pushed when the moderation queue changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModerationQueueItem {
    /// Queue entry ID
    pub id: String,
    /// Object awaiting review
    #[serde(default)]
    pub object: Option<Object>,
    /// Reports against the object
    #[serde(default)]
    pub report_count: i64,
    /// Highest report severity
    pub severity: Severity,
    /// Queue priority, higher first
    #[serde(default)]
    pub priority: i32,
    /// Assigned moderator
    #[serde(default)]
    pub assigned_to: Option<String>,
    /// Review deadline
    #[serde(default)]
    pub deadline: Option<DateTime<Utc>>,
}

/// Pushed when a moderation decision concerns an actor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModerationEvent {
    /// Event ID
    pub id: String,
    /// Affected actor
    pub actor_id: String,
    /// Action taken
    pub action: ModerationAction,
    /// Stated reason
    #[serde(default)]
    pub reason: Option<String>,
    /// Moderator who acted, if not automated
    #[serde(default)]
    pub moderator_id: Option<String>,
    /// Event time
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_order() {
        assert!(Severity::Critical > Severity::High);
        assert!(Severity::Low > Severity::Info);
    }

    #[test]
    fn test_deserialize_ai_analysis() {
        let analysis: AiAnalysis = serde_json::from_value(serde_json::json!({
            "id": "an-1",
            "objectId": "obj-1",
            "overallRisk": 0.81,
            "textAnalysis": { "toxicity": 0.9, "spamScore": 0.1 },
            "moderationAction": "REVIEW",
            "confidence": 0.7,
            "analyzedAt": "2025-04-01T10:00:00Z"
        }))
        .unwrap();

        assert_eq!(analysis.moderation_action, ModerationAction::Review);
        let text = analysis.text_analysis.unwrap();
        assert_eq!(text.toxicity, 0.9);
        assert!(!text.pii_detected);
    }

    #[test]
    fn test_flag_input_validation() {
        let input = FlagInput {
            object_id: "obj-1".to_string(),
            reason: String::new(),
            evidence: Vec::new(),
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_pattern_input_serialization() {
        let input = ModerationPatternInput {
            pattern: "buy now".to_string(),
            kind: PatternKind::Phrase,
            severity: Severity::Medium,
            active: true,
        };
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            serde_json::json!({
                "pattern": "buy now",
                "type": "PHRASE",
                "severity": "MEDIUM",
                "active": true
            })
        );
    }
}
