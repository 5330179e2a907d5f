//! Notifications.

use fedigraph_common::ClientResult;
use fedigraph_types::{Connection, Notification, NotificationFilter};
use serde_json::json;

use super::require;
use crate::client::FediClient;
use crate::operation::Operation;
use crate::pagination::PageArgs;

const FETCH_NOTIFICATIONS: Operation = Operation::query(
    "FetchNotifications",
    "notifications",
    concat!(
        "query FetchNotifications($types: [NotificationType!], $excludeTypes: [NotificationType!], \
         $accountId: ID, ",
        page_vars!(),
        ") { notifications(types: $types, excludeTypes: $excludeTypes, accountId: $accountId, ",
        page_args!(),
        ") ",
        connection_of!("NotificationFields"),
        " }",
        notification_fields!(),
        object_document!()
    ),
);

const MARK_NOTIFICATION_READ: Operation = Operation::mutation(
    "MarkNotificationRead",
    "markNotificationRead",
    "mutation MarkNotificationRead($id: ID!) { markNotificationRead(id: $id) }",
);

const CLEAR_NOTIFICATIONS: Operation = Operation::mutation(
    "ClearNotifications",
    "clearNotifications",
    "mutation ClearNotifications { clearNotifications }",
);

impl FediClient {
    /// Notifications matching `filter`, newest first.
    pub async fn fetch_notifications(
        &self,
        filter: &NotificationFilter,
        page: &PageArgs,
    ) -> ClientResult<Connection<Notification>> {
        let variables = serde_json::to_value(filter)?;
        self.paginate(&FETCH_NOTIFICATIONS, variables, page).await
    }

    /// Mark one notification read. Returns the server's acknowledgement.
    pub async fn mark_notification_read(&self, id: &str) -> ClientResult<bool> {
        require("id", id)?;
        self.mutate(&MARK_NOTIFICATION_READ, json!({ "id": id }))
            .await
    }

    /// Dismiss every notification.
    pub async fn clear_notifications(&self) -> ClientResult<bool> {
        self.mutate(&CLEAR_NOTIFICATIONS, json!({})).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::recording_client;
    use fedigraph_types::NotificationType;
    use serde_json::Value;

    #[tokio::test]
    async fn test_filter_and_page_variables() {
        let (client, transport) = recording_client();
        transport.respond(json!({
            "data": { "notifications": {
                "totalCount": 1,
                "edges": [{ "cursor": "c1", "node": {
                    "id": "nt1",
                    "type": "FOLLOW",
                    "actor": { "id": "a2", "username": "bob" },
                    "createdAt": "2025-02-01T00:00:00Z"
                } }],
                "pageInfo": { "hasNextPage": false, "hasPreviousPage": false }
            } }
        }));

        let filter = NotificationFilter {
            types: vec![NotificationType::Follow, NotificationType::Mention],
            ..NotificationFilter::default()
        };
        let page = client
            .fetch_notifications(&filter, &PageArgs::default())
            .await
            .unwrap();
        assert_eq!(page.nodes().next().unwrap().kind, NotificationType::Follow);

        assert_eq!(
            Value::Object(transport.last().variables),
            json!({ "types": ["FOLLOW", "MENTION"], "first": 20 })
        );
    }

    #[tokio::test]
    async fn test_clear_notifications() {
        let (client, transport) = recording_client();
        transport.respond(json!({ "data": { "clearNotifications": true } }));

        assert!(client.clear_notifications().await.unwrap());
        assert!(transport.last().variables.is_empty());
    }
}
