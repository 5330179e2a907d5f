//! Federation limits and health.

use fedigraph_common::ClientResult;
use fedigraph_types::{FederationHealth, FederationLimit, FederationLimitInput};
use serde_json::json;

use super::require;
use crate::client::FediClient;
use crate::operation::Operation;

const FETCH_FEDERATION_LIMITS: Operation = Operation::query(
    "FetchFederationLimits",
    "federationLimits",
    concat!(
        "query FetchFederationLimits { federationLimits { ...FederationLimitFields } }",
        federation_limit_fields!()
    ),
);

const SET_FEDERATION_LIMIT: Operation = Operation::mutation(
    "SetFederationLimit",
    "setFederationLimit",
    concat!(
        "mutation SetFederationLimit($input: FederationLimitInput!) { \
         setFederationLimit(input: $input) { ...FederationLimitFields } }",
        federation_limit_fields!()
    ),
);

const GET_FEDERATION_HEALTH: Operation = Operation::query(
    "GetFederationHealth",
    "federationHealth",
    concat!(
        "query GetFederationHealth($domain: String!) { federationHealth(domain: $domain) { \
         domain status responseTimeMs errorRate lastSuccess ",
        health_issue_selection!(),
        " } }"
    ),
);

impl FediClient {
    /// Limits configured for remote domains.
    pub async fn fetch_federation_limits(&self) -> ClientResult<Vec<FederationLimit>> {
        self.query(&FETCH_FEDERATION_LIMITS, json!({})).await
    }

    /// Create or replace the limits for one domain.
    pub async fn set_federation_limit(
        &self,
        input: &FederationLimitInput,
    ) -> ClientResult<FederationLimit> {
        self.mutate_input(&SET_FEDERATION_LIMIT, input).await
    }

    /// Current health of one remote domain.
    pub async fn get_federation_health(&self, domain: &str) -> ClientResult<FederationHealth> {
        let domain = domain.trim().to_ascii_lowercase();
        require("domain", &domain)?;
        self.query(&GET_FEDERATION_HEALTH, json!({ "domain": domain }))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::recording_client;
    use fedigraph_common::ClientError;
    use fedigraph_types::HealthStatus;

    #[tokio::test]
    async fn test_federation_health() {
        let (client, transport) = recording_client();
        transport.respond(json!({
            "data": { "federationHealth": {
                "domain": "remote.example",
                "status": "WARNING",
                "errorRate": 0.12,
                "issues": [{
                    "type": "SLOW_RESPONSES",
                    "severity": "MEDIUM",
                    "description": "p95 above 2s",
                    "detectedAt": "2025-02-01T00:00:00Z"
                }]
            } }
        }));

        let health = client
            .get_federation_health(" Remote.Example ")
            .await
            .unwrap();
        assert_eq!(health.status, HealthStatus::Warning);
        assert_eq!(health.issues.len(), 1);
        assert_eq!(transport.last().variables["domain"], "remote.example");
    }

    #[tokio::test]
    async fn test_set_limit_requires_domain() {
        let (client, transport) = recording_client();
        let input = FederationLimitInput::default();

        let err = client.set_federation_limit(&input).await.unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
        assert!(transport.requests().is_empty());
    }
}
