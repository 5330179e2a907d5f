//! Federation health and instance metrics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::moderation::Severity;

/// Health of a remote instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HealthStatus {
    /// Responding normally
    Healthy,
    /// Degraded
    Warning,
    /// Mostly failing
    Critical,
    /// Unreachable
    Offline,
    /// Not yet checked
    #[serde(other)]
    Unknown,
}

/// A problem observed with a remote instance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthIssue {
    /// Issue type
    #[serde(rename = "type")]
    pub kind: String,
    /// Issue severity
    pub severity: Severity,
    /// Human-readable description
    pub description: String,
    /// First seen
    pub detected_at: DateTime<Utc>,
}

/// Federation health snapshot for one domain.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FederationHealth {
    /// Remote domain
    pub domain: String,
    /// Current status
    pub status: HealthStatus,
    /// Recent average response time
    #[serde(default)]
    pub response_time_ms: Option<f64>,
    /// Fraction of failed deliveries over the last window.
    #[serde(default)]
    pub error_rate: f64,
    /// Last successful delivery
    #[serde(default)]
    pub last_success: Option<DateTime<Utc>>,
    /// Open issues
    #[serde(default)]
    pub issues: Vec<HealthIssue>,
}

/// Pushed when a domain's health status changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FederationHealthUpdate {
    /// Remote domain
    pub domain: String,
    /// Status before the change
    pub previous_status: HealthStatus,
    /// Status after the change
    pub current_status: HealthStatus,
    /// Open issues
    #[serde(default)]
    pub issues: Vec<HealthIssue>,
    /// Changed at
    pub timestamp: DateTime<Utc>,
}

impl FederationHealthUpdate {
    /// Whether the domain got worse.
    #[must_use]
    pub const fn is_degradation(&self) -> bool {
        rank(self.current_status) > rank(self.previous_status)
    }
}

const fn rank(status: HealthStatus) -> u8 {
    match status {
        HealthStatus::Healthy => 0,
        HealthStatus::Unknown => 1,
        HealthStatus::Warning => 2,
        HealthStatus::Critical => 3,
        HealthStatus::Offline => 4,
    }
}

/// Pushed instance metric sample.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsUpdate {
    /// Metric ID
    pub metric_id: String,
    /// Metric category
    pub category: String,
    /// Metric kind, e.g. `gauge`
    pub metric_type: String,
    /// Sampled value
    pub value: f64,
    /// Unit of `value`
    #[serde(default)]
    pub unit: Option<String>,
    /// Remote domain, when domain specific
    #[serde(default)]
    pub domain: Option<String>,
    /// Sampled at
    pub timestamp: DateTime<Utc>,
}

/// Pushed when a service metric crosses its threshold.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceAlert {
    /// Alert ID
    pub id: String,
    /// Service that degraded
    pub service: String,
    /// Metric that crossed the threshold
    pub metric: String,
    /// Configured threshold
    pub threshold: f64,
    /// Observed value
    pub actual_value: f64,
    /// Alert severity
    pub severity: Severity,
    /// Raised at
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn update(previous: &str, current: &str) -> FederationHealthUpdate {
        serde_json::from_value(serde_json::json!({
            "domain": "remote.example",
            "previousStatus": previous,
            "currentStatus": current,
            "timestamp": "2025-06-01T00:00:00Z"
        }))
        .unwrap()
    }

    #[test]
    fn test_degradation() {
        assert!(update("HEALTHY", "CRITICAL").is_degradation());
        assert!(!update("OFFLINE", "HEALTHY").is_degradation());
        assert!(!update("WARNING", "WARNING").is_degradation());
    }

    #[test]
    fn test_unknown_status() {
        let u = update("HEALTHY", "DEGRADED_BUT_NEW");
        assert_eq!(u.current_status, HealthStatus::Unknown);
    }
}
