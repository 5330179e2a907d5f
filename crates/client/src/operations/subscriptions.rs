//! Subscription topics.
//!
//! Every method opens its own connection. Calling one again starts a fresh
//! stream; nothing is replayed.

use fedigraph_common::{ClientError, ClientResult};
use fedigraph_types::{
    Activity, ActivityType, AiAnalysis, BudgetAlert, Conversation, CostAlert,
    FederationHealthUpdate, MetricsUpdate, ModerationAlert, ModerationEvent, ModerationQueueItem,
    Notification, Object, PerformanceAlert, Relationship, Severity, TrustUpdate, normalize_tag,
};
use serde_json::{Value, json};

use super::require;
use super::timeline::TimelineKind;
use crate::client::FediClient;
use crate::operation::Operation;
use crate::subscription::SubscriptionStream;

const TIMELINE_UPDATES: Operation = Operation::subscription(
    "OnTimelineUpdate",
    "timelineUpdates",
    concat!(
        "subscription OnTimelineUpdate($type: TimelineType!, $listId: ID, $hashtag: String, $actorId: ID) { \
         timelineUpdates(type: $type, listId: $listId, hashtag: $hashtag, actorId: $actorId) { ...ObjectFields } }",
        object_document!()
    ),
);

const NOTIFICATION_ADDED: Operation = Operation::subscription(
    "OnNotification",
    "notificationAdded",
    concat!(
        "subscription OnNotification { notificationAdded { ...NotificationFields } }",
        notification_fields!(),
        object_document!()
    ),
);

const CONVERSATION_UPDATED: Operation = Operation::subscription(
    "OnConversationUpdate",
    "conversationUpdated",
    concat!(
        "subscription OnConversationUpdate { conversationUpdated { ...ConversationFields } }",
        conversation_fields!(),
        object_document!()
    ),
);

const LIST_UPDATES: Operation = Operation::subscription(
    "OnListUpdate",
    "listUpdates",
    concat!(
        "subscription OnListUpdate($listId: ID!) { listUpdates(listId: $listId) { ...ObjectFields } }",
        object_document!()
    ),
);

const HASHTAG_ACTIVITY: Operation = Operation::subscription(
    "OnHashtagActivity",
    "hashtagActivity",
    concat!(
        "subscription OnHashtagActivity($hashtags: [String!]!) { hashtagActivity(hashtags: $hashtags) { ...ObjectFields } }",
        object_document!()
    ),
);

const ACTIVITY_STREAM: Operation = Operation::subscription(
    "OnActivity",
    "activityStream",
    concat!(
        "subscription OnActivity($types: [ActivityType!]) { activityStream(types: $types) { ...ActivityFields } }",
        activity_fields!(),
        object_document!()
    ),
);

const RELATIONSHIP_UPDATES: Operation = Operation::subscription(
    "OnRelationshipUpdate",
    "relationshipUpdates",
    concat!(
        "subscription OnRelationshipUpdate($actorId: ID) { relationshipUpdates(actorId: $actorId) { ...RelationshipFields } }",
        relationship_fields!()
    ),
);

const MODERATION_ALERTS: Operation = Operation::subscription(
    "OnModerationAlert",
    "moderationAlerts",
    concat!(
        "subscription OnModerationAlert($severity: Severity) { moderationAlerts(severity: $severity) { \
         id severity patternId matchedText object { ...ObjectFields } suggestedAction confidence handled createdAt } }",
        object_document!()
    ),
);

const MODERATION_QUEUE: Operation = Operation::subscription(
    "OnModerationQueueUpdate",
    "moderationQueueUpdate",
    concat!(
        "subscription OnModerationQueueUpdate { moderationQueueUpdate { \
         id object { ...ObjectFields } reportCount severity priority assignedTo deadline } }",
        object_document!()
    ),
);

const MODERATION_EVENTS: Operation = Operation::subscription(
    "OnModerationEvent",
    "moderationEvents",
    "subscription OnModerationEvent($actorId: ID) { moderationEvents(actorId: $actorId) { \
     id actorId action reason moderatorId createdAt } }",
);

const AI_ANALYSIS_UPDATES: Operation = Operation::subscription(
    "OnAiAnalysisUpdate",
    "aiAnalysisUpdates",
    concat!(
        "subscription OnAiAnalysisUpdate($objectId: ID) { aiAnalysisUpdates(objectId: $objectId) { ...AiAnalysisFields } }",
        ai_analysis_fields!()
    ),
);

const TRUST_UPDATES: Operation = Operation::subscription(
    "OnTrustUpdate",
    "trustUpdates",
    "subscription OnTrustUpdate($actorId: ID) { trustUpdates(actorId: $actorId) { \
     actorId category previousScore newScore reason updatedAt } }",
);

const COST_ALERTS: Operation = Operation::subscription(
    "OnCostAlert",
    "costAlerts",
    "subscription OnCostAlert($threshold: Float) { costAlerts(threshold: $threshold) { \
     id type amount threshold domain message timestamp } }",
);

const BUDGET_ALERTS: Operation = Operation::subscription(
    "OnBudgetAlert",
    "budgetAlerts",
    "subscription OnBudgetAlert($domain: String) { budgetAlerts(domain: $domain) { \
     domain budgetUsd spentUsd percentUsed projectedOverspend alertLevel timestamp } }",
);

const FEDERATION_HEALTH_UPDATES: Operation = Operation::subscription(
    "OnFederationHealthUpdate",
    "federationHealthUpdates",
    concat!(
        "subscription OnFederationHealthUpdate($domain: String) { federationHealthUpdates(domain: $domain) { \
         domain previousStatus currentStatus timestamp ",
        health_issue_selection!(),
        " } }"
    ),
);

const QUOTE_ACTIVITY: Operation = Operation::subscription(
    "OnQuoteActivity",
    "quoteActivity",
    concat!(
        "subscription OnQuoteActivity($noteId: ID!) { quoteActivity(noteId: $noteId) { ...ObjectFields } }",
        object_document!()
    ),
);

const METRICS_UPDATES: Operation = Operation::subscription(
    "OnMetricsUpdate",
    "metricsUpdates",
    "subscription OnMetricsUpdate($category: String) { metricsUpdates(category: $category) { \
     metricId category metricType value unit domain timestamp } }",
);

const PERFORMANCE_ALERTS: Operation = Operation::subscription(
    "OnPerformanceAlert",
    "performanceAlerts",
    "subscription OnPerformanceAlert($severity: Severity) { performanceAlerts(severity: $severity) { \
     id service metric threshold actualValue severity timestamp } }",
);

/// `{ key: value }`, or `{}` when `value` is `None`.
fn optional(key: &str, value: Option<Value>) -> Value {
    let mut variables = json!({});
    if let Some(value) = value {
        variables[key] = value;
    }
    variables
}

impl FediClient {
    /// New notes on a timeline.
    pub async fn subscribe_timeline(
        &self,
        kind: &TimelineKind,
    ) -> ClientResult<SubscriptionStream<Object>> {
        self.subscribe(&TIMELINE_UPDATES, kind.variables()?).await
    }

    /// Notifications for the viewer.
    pub async fn subscribe_notifications(&self) -> ClientResult<SubscriptionStream<Notification>> {
        self.subscribe(&NOTIFICATION_ADDED, json!({})).await
    }

    /// Changes to the viewer's conversations.
    pub async fn subscribe_conversations(&self) -> ClientResult<SubscriptionStream<Conversation>> {
        self.subscribe(&CONVERSATION_UPDATED, json!({})).await
    }

    /// New notes from members of a list.
    pub async fn subscribe_list_updates(
        &self,
        list_id: &str,
    ) -> ClientResult<SubscriptionStream<Object>> {
        require("listId", list_id)?;
        self.subscribe(&LIST_UPDATES, json!({ "listId": list_id }))
            .await
    }

    /// New notes carrying any of `hashtags`.
    pub async fn subscribe_hashtag_activity(
        &self,
        hashtags: &[String],
    ) -> ClientResult<SubscriptionStream<Object>> {
        let hashtags: Vec<&str> = hashtags
            .iter()
            .map(|tag| normalize_tag(tag))
            .filter(|tag| !tag.is_empty())
            .collect();
        if hashtags.is_empty() {
            return Err(ClientError::Validation(
                "hashtags: at least one hashtag is required".to_string(),
            ));
        }
        self.subscribe(&HASHTAG_ACTIVITY, json!({ "hashtags": hashtags }))
            .await
    }

    /// Raw activities, optionally only of `types`. An empty slice means all.
    pub async fn subscribe_activity_stream(
        &self,
        types: &[ActivityType],
    ) -> ClientResult<SubscriptionStream<Activity>> {
        let types = (!types.is_empty()).then(|| json!(types));
        self.subscribe(&ACTIVITY_STREAM, optional("types", types))
            .await
    }

    /// Relationship changes, for one actor or all of them.
    pub async fn subscribe_relationship_updates(
        &self,
        actor_id: Option<&str>,
    ) -> ClientResult<SubscriptionStream<Relationship>> {
        self.subscribe(
            &RELATIONSHIP_UPDATES,
            optional("actorId", actor_id.map(Value::from)),
        )
        .await
    }

    /// Moderation alerts at or above `min_severity`.
    pub async fn subscribe_moderation_alerts(
        &self,
        min_severity: Option<Severity>,
    ) -> ClientResult<SubscriptionStream<ModerationAlert>> {
        let severity = min_severity.map(|s| json!(s));
        self.subscribe(&MODERATION_ALERTS, optional("severity", severity))
            .await
    }

    /// Changes to the moderation queue.
    pub async fn subscribe_moderation_queue(
        &self,
    ) -> ClientResult<SubscriptionStream<ModerationQueueItem>> {
        self.subscribe(&MODERATION_QUEUE, json!({})).await
    }

    /// Moderation decisions, for one actor or all of them.
    pub async fn subscribe_moderation_events(
        &self,
        actor_id: Option<&str>,
    ) -> ClientResult<SubscriptionStream<ModerationEvent>> {
        self.subscribe(
            &MODERATION_EVENTS,
            optional("actorId", actor_id.map(Value::from)),
        )
        .await
    }

    /// Finished AI analyses, for one object or all of them.
    pub async fn subscribe_ai_analysis_updates(
        &self,
        object_id: Option<&str>,
    ) -> ClientResult<SubscriptionStream<AiAnalysis>> {
        self.subscribe(
            &AI_ANALYSIS_UPDATES,
            optional("objectId", object_id.map(Value::from)),
        )
        .await
    }

    /// Trust score changes, for one actor or all of them.
    pub async fn subscribe_trust_updates(
        &self,
        actor_id: Option<&str>,
    ) -> ClientResult<SubscriptionStream<TrustUpdate>> {
        self.subscribe(
            &TRUST_UPDATES,
            optional("actorId", actor_id.map(Value::from)),
        )
        .await
    }

    /// Cost alerts above `threshold` US dollars.
    pub async fn subscribe_cost_alerts(
        &self,
        threshold: Option<f64>,
    ) -> ClientResult<SubscriptionStream<CostAlert>> {
        self.subscribe(
            &COST_ALERTS,
            optional("threshold", threshold.map(Value::from)),
        )
        .await
    }

    /// Budget alerts, for one domain or all of them.
    pub async fn subscribe_budget_alerts(
        &self,
        domain: Option<&str>,
    ) -> ClientResult<SubscriptionStream<BudgetAlert>> {
        self.subscribe(&BUDGET_ALERTS, optional("domain", domain.map(Value::from)))
            .await
    }

    /// Federation health changes, for one domain or all of them.
    pub async fn subscribe_federation_health(
        &self,
        domain: Option<&str>,
    ) -> ClientResult<SubscriptionStream<FederationHealthUpdate>> {
        self.subscribe(
            &FEDERATION_HEALTH_UPDATES,
            optional("domain", domain.map(Value::from)),
        )
        .await
    }

    /// New quotes of a note.
    pub async fn subscribe_quote_activity(
        &self,
        note_id: &str,
    ) -> ClientResult<SubscriptionStream<Object>> {
        require("noteId", note_id)?;
        self.subscribe(&QUOTE_ACTIVITY, json!({ "noteId": note_id }))
            .await
    }

    /// Instance metric samples, optionally for one category.
    pub async fn subscribe_metrics_updates(
        &self,
        category: Option<&str>,
    ) -> ClientResult<SubscriptionStream<MetricsUpdate>> {
        self.subscribe(
            &METRICS_UPDATES,
            optional("category", category.map(Value::from)),
        )
        .await
    }

    /// Performance alerts, optionally only at `severity`.
    pub async fn subscribe_performance_alerts(
        &self,
        severity: Option<Severity>,
    ) -> ClientResult<SubscriptionStream<PerformanceAlert>> {
        let severity = severity.map(|s| json!(s));
        self.subscribe(&PERFORMANCE_ALERTS, optional("severity", severity))
            .await
    }
}
