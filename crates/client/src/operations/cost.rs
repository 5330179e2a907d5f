//! Operational cost and per-domain budgets.

use fedigraph_common::ClientResult;
use fedigraph_types::{CostBreakdown, InstanceBudget, InstanceBudgetInput, Period};
use serde_json::json;

use crate::client::FediClient;
use crate::operation::Operation;

const GET_COST_BREAKDOWN: Operation = Operation::query(
    "GetCostBreakdown",
    "costBreakdown",
    "query GetCostBreakdown($period: Period!) { costBreakdown(period: $period) { \
     period totalCost operations { operation count cost } periodStart periodEnd } }",
);

const FETCH_INSTANCE_BUDGETS: Operation = Operation::query(
    "FetchInstanceBudgets",
    "instanceBudgets",
    concat!(
        "query FetchInstanceBudgets { instanceBudgets { ...InstanceBudgetFields } }",
        budget_fields!()
    ),
);

const SET_INSTANCE_BUDGET: Operation = Operation::mutation(
    "SetInstanceBudget",
    "setInstanceBudget",
    concat!(
        "mutation SetInstanceBudget($input: InstanceBudgetInput!) { \
         setInstanceBudget(input: $input) { ...InstanceBudgetFields } }",
        budget_fields!()
    ),
);

impl FediClient {
    /// What the instance spent over `period`, per operation kind.
    pub async fn get_cost_breakdown(&self, period: Period) -> ClientResult<CostBreakdown> {
        self.query(&GET_COST_BREAKDOWN, json!({ "period": period }))
            .await
    }

    /// Budgets configured for remote domains.
    pub async fn fetch_instance_budgets(&self) -> ClientResult<Vec<InstanceBudget>> {
        self.query(&FETCH_INSTANCE_BUDGETS, json!({})).await
    }

    /// Create or replace the budget for one domain.
    pub async fn set_instance_budget(
        &self,
        input: &InstanceBudgetInput,
    ) -> ClientResult<InstanceBudget> {
        self.mutate_input(&SET_INSTANCE_BUDGET, input).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::recording_client;

    #[tokio::test]
    async fn test_cost_breakdown_period() {
        let (client, transport) = recording_client();
        transport.respond(json!({
            "data": { "costBreakdown": {
                "period": "WEEK",
                "totalCost": 12.25,
                "operations": [{ "operation": "media", "count": 40, "cost": 10.0 }]
            } }
        }));

        let breakdown = client.get_cost_breakdown(Period::Week).await.unwrap();
        assert_eq!(breakdown.top_operation().unwrap().operation, "media");
        assert_eq!(transport.last().variables["period"], "WEEK");
    }

    #[tokio::test]
    async fn test_set_instance_budget() {
        let (client, transport) = recording_client();
        transport.respond(json!({
            "data": { "setInstanceBudget": {
                "domain": "remote.example",
                "monthlyBudgetUsd": 50.0,
                "currentSpendUsd": 10.0,
                "remainingBudgetUsd": 40.0,
                "alertThreshold": 0.8,
                "autoLimit": true
            } }
        }));

        let input = InstanceBudgetInput {
            domain: "remote.example".to_string(),
            monthly_budget_usd: 50.0,
            alert_threshold: 0.8,
            auto_limit: true,
        };
        let budget = client.set_instance_budget(&input).await.unwrap();
        assert_eq!(budget.utilization(), 0.2);
        assert_eq!(transport.last().variables["input"]["monthlyBudgetUsd"], 50.0);
    }
}
