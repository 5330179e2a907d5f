//! Operational cost, budgets and federation limits.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Accounting period.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Period {
    /// Last hour
    Hour,
    /// Last day
    #[default]
    Day,
    /// Last week
    Week,
    /// Last month
    Month,
}

/// Cost of the instance over one period.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    /// Reporting period
    pub period: Period,
    /// Total in US dollars.
    pub total_cost: f64,
    /// Cost per operation
    #[serde(default)]
    pub operations: Vec<CostItem>,
    /// Period start
    #[serde(default)]
    pub period_start: Option<DateTime<Utc>>,
    /// Period end
    #[serde(default)]
    pub period_end: Option<DateTime<Utc>>,
}

/// Cost attributed to one operation kind.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostItem {
    /// Operation name
    pub operation: String,
    /// Times executed
    pub count: i64,
    /// Total cost in USD
    pub cost: f64,
}

impl CostBreakdown {
    /// The most expensive operation, if any were recorded.
    #[must_use]
    pub fn top_operation(&self) -> Option<&CostItem> {
        self.operations
            .iter()
            .max_by(|a, b| a.cost.total_cmp(&b.cost))
    }
}

/// Spending cap for federation with one remote domain.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceBudget {
    /// Remote domain
    pub domain: String,
    /// Monthly budget in USD
    pub monthly_budget_usd: f64,
    /// Spent this period in USD
    pub current_spend_usd: f64,
    /// Left this period in USD
    pub remaining_budget_usd: f64,
    /// Projected overrun at period end, if any
    #[serde(default)]
    pub projected_overspend: Option<f64>,
    /// Fraction of the budget at which alerts fire.
    pub alert_threshold: f64,
    /// Throttle federation automatically when the budget is exhausted.
    #[serde(default)]
    pub auto_limit: bool,
    /// Current period start
    #[serde(default)]
    pub period_start: Option<DateTime<Utc>>,
}

impl InstanceBudget {
    /// Fraction of the monthly budget already spent.
    #[must_use]
    pub fn utilization(&self) -> f64 {
        if self.monthly_budget_usd <= 0.0 {
            return 0.0;
        }
        self.current_spend_usd / self.monthly_budget_usd
    }
}

/// Input for `setInstanceBudget`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InstanceBudgetInput {
    /// Remote domain
    #[validate(length(min = 1, max = 253))]
    pub domain: String,
    /// Monthly budget in USD
    #[validate(range(min = 0.0))]
    pub monthly_budget_usd: f64,
    /// Fraction of the budget that raises an alert
    #[validate(range(min = 0.0, max = 1.0))]
    pub alert_threshold: f64,
    /// Throttle federation once the budget is spent
    pub auto_limit: bool,
}

/// Rate and volume limits for one remote domain.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FederationLimit {
    /// Remote domain
    pub domain: String,
    /// Inbound byte cap per day
    #[serde(default)]
    pub ingress_bytes_per_day: Option<i64>,
    /// Outbound byte cap per day
    #[serde(default)]
    pub egress_bytes_per_day: Option<i64>,
    /// Request rate cap
    #[serde(default)]
    pub requests_per_minute: Option<i32>,
    /// Monthly budget in USD
    #[serde(default)]
    pub monthly_budget_usd: Option<f64>,
    /// Federation disabled
    #[serde(default)]
    pub blocked: bool,
    /// Last change
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Input for `setFederationLimit`. Absent limits are removed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FederationLimitInput {
    /// Remote domain
    #[validate(length(min = 1, max = 253))]
    pub domain: String,
    /// Inbound byte cap per day
    #[validate(range(min = 0))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingress_bytes_per_day: Option<i64>,
    /// Outbound byte cap per day
    #[validate(range(min = 0))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub egress_bytes_per_day: Option<i64>,
    /// Request rate cap
    #[validate(range(min = 0))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requests_per_minute: Option<i32>,
    /// Monthly budget in USD
    #[validate(range(min = 0.0))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_budget_usd: Option<f64>,
    /// Disable federation
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub blocked: bool,
}

/// Kind of a cost alert.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CostAlertType {
    /// Spend crossed the threshold
    ThresholdExceeded,
    /// Sudden increase
    Spike,
    /// Unusual pattern
    Anomaly,
    /// Type this client does not know yet
    #[serde(other)]
    Other,
}

/// Pushed when spend crosses a threshold.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostAlert {
    /// Alert ID
    pub id: String,
    /// Alert type
    #[serde(rename = "type")]
    pub kind: CostAlertType,
    /// Observed cost in USD
    pub amount: f64,
    /// Threshold that was crossed
    pub threshold: f64,
    /// Remote domain, when domain specific
    #[serde(default)]
    pub domain: Option<String>,
    /// Human-readable description
    pub message: String,
    /// Raised at
    pub timestamp: DateTime<Utc>,
}

/// Level of a budget alert.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertLevel {
    /// Informational
    Info,
    /// Approaching the budget
    Warning,
    /// Over budget
    Critical,
}

/// Pushed when a domain approaches or exceeds its budget.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetAlert {
    /// Remote domain
    pub domain: String,
    /// Budget in USD
    pub budget_usd: f64,
    /// Spent in USD
    pub spent_usd: f64,
    /// Share of the budget used, in percent
    pub percent_used: f64,
    /// Projected overrun in USD
    #[serde(default)]
    pub projected_overspend: Option<f64>,
    /// Alert level
    pub alert_level: AlertLevel,
    /// Raised at
    pub timestamp: DateTime<Utc>,
}
