//! Direct conversations.

use fedigraph_common::ClientResult;
use fedigraph_types::{Connection, Conversation};
use serde_json::json;

use super::require;
use crate::client::FediClient;
use crate::missing_target::DeleteOutcome;
use crate::operation::Operation;
use crate::pagination::PageArgs;

const FETCH_CONVERSATIONS: Operation = Operation::query(
    "FetchConversations",
    "conversations",
    concat!(
        "query FetchConversations(",
        page_vars!(),
        ") { conversations(",
        page_args!(),
        ") ",
        connection_of!("ConversationFields"),
        " }",
        conversation_fields!(),
        object_document!()
    ),
);

const GET_CONVERSATION: Operation = Operation::query(
    "GetConversation",
    "conversation",
    concat!(
        "query GetConversation($id: ID!) { conversation(id: $id) { ...ConversationFields } }",
        conversation_fields!(),
        object_document!()
    ),
);

const MARK_CONVERSATION_READ: Operation = Operation::mutation(
    "MarkConversationRead",
    "markConversationRead",
    concat!(
        "mutation MarkConversationRead($id: ID!) { markConversationRead(id: $id) { ...ConversationFields } }",
        conversation_fields!(),
        object_document!()
    ),
);

const DELETE_CONVERSATION: Operation = Operation::mutation(
    "DeleteConversation",
    "deleteConversation",
    "mutation DeleteConversation($id: ID!) { deleteConversation(id: $id) }",
);

impl FediClient {
    pub async fn fetch_conversations(
        &self,
        page: &PageArgs,
    ) -> ClientResult<Connection<Conversation>> {
        self.paginate(&FETCH_CONVERSATIONS, json!({}), page).await
    }

    pub async fn get_conversation(&self, id: &str) -> ClientResult<Option<Conversation>> {
        require("id", id)?;
        self.query(&GET_CONVERSATION, json!({ "id": id })).await
    }

    pub async fn mark_conversation_read(&self, id: &str) -> ClientResult<Conversation> {
        require("id", id)?;
        self.mutate(&MARK_CONVERSATION_READ, json!({ "id": id }))
            .await
    }

    /// Remove a conversation from the viewer's list. The messages stay.
    pub async fn delete_conversation(&self, id: &str) -> ClientResult<DeleteOutcome> {
        require("id", id)?;
        self.remove(&DELETE_CONVERSATION, json!({ "id": id })).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::recording_client;
    use serde_json::Value;

    #[tokio::test]
    async fn test_fetch_conversations_only_page_variables() {
        let (client, transport) = recording_client();
        transport.respond(json!({
            "data": { "conversations": {
                "edges": [],
                "pageInfo": { "hasNextPage": false, "hasPreviousPage": false }
            } }
        }));

        client
            .fetch_conversations(&PageArgs::before("c5", 10))
            .await
            .unwrap();

        assert_eq!(
            Value::Object(transport.last().variables),
            json!({ "last": 10, "before": "c5" })
        );
    }

    #[tokio::test]
    async fn test_mark_read() {
        let (client, transport) = recording_client();
        transport.respond(json!({
            "data": { "markConversationRead": {
                "id": "cv1",
                "accounts": [],
                "unread": false,
                "updatedAt": "2025-02-01T00:00:00Z"
            } }
        }));

        let conversation = client.mark_conversation_read("cv1").await.unwrap();
        assert!(!conversation.unread);
    }
}
