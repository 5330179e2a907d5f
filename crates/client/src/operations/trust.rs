//! Trust scores.

use fedigraph_common::ClientResult;
use fedigraph_types::{TrustCategory, TrustInput, TrustScore};
use serde_json::json;

use super::require;
use crate::client::FediClient;
use crate::operation::Operation;

const GET_TRUST_SCORE: Operation = Operation::query(
    "GetTrustScore",
    "trustScore",
    concat!(
        "query GetTrustScore($actorId: ID!, $category: TrustCategory) { \
         trustScore(actorId: $actorId, category: $category) { ...TrustScoreFields } }",
        trust_score_fields!()
    ),
);

const UPDATE_TRUST: Operation = Operation::mutation(
    "UpdateTrust",
    "updateTrust",
    concat!(
        "mutation UpdateTrust($input: TrustInput!) { updateTrust(input: $input) { ...TrustScoreFields } }",
        trust_score_fields!()
    ),
);

impl FediClient {
    /// The instance's trust in an actor for one category. `None` when the
    /// server has not scored the actor yet.
    pub async fn get_trust_score(
        &self,
        actor_id: &str,
        category: TrustCategory,
    ) -> ClientResult<Option<TrustScore>> {
        require("actorId", actor_id)?;
        self.query(
            &GET_TRUST_SCORE,
            json!({ "actorId": actor_id, "category": category }),
        )
        .await
    }

    /// Submit a trust signal about another actor.
    pub async fn update_trust(&self, input: &TrustInput) -> ClientResult<TrustScore> {
        self.mutate_input(&UPDATE_TRUST, input).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::recording_client;
    use fedigraph_common::ClientError;

    #[tokio::test]
    async fn test_get_trust_score() {
        let (client, transport) = recording_client();
        transport.respond(json!({
            "data": { "trustScore": {
                "actorId": "a2",
                "category": "BEHAVIOR",
                "score": 72.5,
                "updatedAt": "2025-02-01T00:00:00Z"
            } }
        }));

        let score = client
            .get_trust_score("a2", TrustCategory::Behavior)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(score.score, 72.5);
        assert_eq!(transport.last().variables["category"], "BEHAVIOR");
    }

    #[tokio::test]
    async fn test_update_trust_out_of_range() {
        let (client, transport) = recording_client();
        let input = TrustInput {
            target_actor_id: "a2".to_string(),
            category: TrustCategory::Content,
            score: -5.0,
            context: None,
        };

        let err = client.update_trust(&input).await.unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
        assert!(transport.requests().is_empty());
    }
}
