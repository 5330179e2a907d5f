//! Notes and reactions to them.

use fedigraph_common::ClientResult;
use fedigraph_types::{Connection, CreateNoteInput, Object, UpdateNoteInput};
use serde_json::json;
use validator::Validate;

use super::require;
use crate::client::FediClient;
use crate::missing_target::DeleteOutcome;
use crate::operation::Operation;
use crate::pagination::PageArgs;

const GET_OBJECT: Operation = Operation::query(
    "GetObject",
    "object",
    concat!(
        "query GetObject($id: ID!) { object(id: $id) { ...ObjectFields } }",
        object_document!()
    ),
);

const FETCH_REPLIES: Operation = Operation::query(
    "FetchReplies",
    "replies",
    concat!(
        "query FetchReplies($objectId: ID!, ",
        page_vars!(),
        ") { replies(objectId: $objectId, ",
        page_args!(),
        ") ",
        connection_of!("ObjectFields"),
        " }",
        object_document!()
    ),
);

const FETCH_QUOTES: Operation = Operation::query(
    "FetchQuotes",
    "quotes",
    concat!(
        "query FetchQuotes($objectId: ID!, ",
        page_vars!(),
        ") { quotes(objectId: $objectId, ",
        page_args!(),
        ") ",
        connection_of!("ObjectFields"),
        " }",
        object_document!()
    ),
);

const FETCH_BOOKMARKS: Operation = Operation::query(
    "FetchBookmarks",
    "bookmarks",
    concat!(
        "query FetchBookmarks(",
        page_vars!(),
        ") { bookmarks(",
        page_args!(),
        ") ",
        connection_of!("ObjectFields"),
        " }",
        object_document!()
    ),
);

const CREATE_NOTE: Operation = Operation::mutation(
    "CreateNote",
    "createNote",
    concat!(
        "mutation CreateNote($input: CreateNoteInput!) { createNote(input: $input) { ...ObjectFields } }",
        object_document!()
    ),
);

const UPDATE_NOTE: Operation = Operation::mutation(
    "UpdateNote",
    "updateNote",
    concat!(
        "mutation UpdateNote($id: ID!, $input: UpdateNoteInput!) { updateNote(id: $id, input: $input) { ...ObjectFields } }",
        object_document!()
    ),
);

const DELETE_NOTE: Operation = Operation::mutation(
    "DeleteNote",
    "deleteObject",
    "mutation DeleteNote($id: ID!) { deleteObject(id: $id) }",
);

macro_rules! object_mutation {
    ($const_name:ident, $name:literal, $root:literal) => {
        const $const_name: Operation = Operation::mutation(
            $name,
            $root,
            concat!(
                "mutation ",
                $name,
                "($id: ID!) { ",
                $root,
                "(id: $id) { ...ObjectFields } }",
                object_document!()
            ),
        );
    };
}

macro_rules! undo_mutation {
    ($const_name:ident, $name:literal, $root:literal) => {
        const $const_name: Operation = Operation::mutation(
            $name,
            $root,
            concat!("mutation ", $name, "($id: ID!) { ", $root, "(id: $id) }"),
        );
    };
}

object_mutation!(LIKE_OBJECT, "LikeObject", "likeObject");
undo_mutation!(UNLIKE_OBJECT, "UnlikeObject", "unlikeObject");
object_mutation!(SHARE_OBJECT, "ShareObject", "shareObject");
undo_mutation!(UNSHARE_OBJECT, "UnshareObject", "unshareObject");
object_mutation!(BOOKMARK_OBJECT, "BookmarkObject", "bookmarkObject");
undo_mutation!(UNBOOKMARK_OBJECT, "UnbookmarkObject", "unbookmarkObject");
object_mutation!(PIN_OBJECT, "PinObject", "pinObject");
undo_mutation!(UNPIN_OBJECT, "UnpinObject", "unpinObject");

impl FediClient {
    /// A note by id, `None` when the server does not know it.
    pub async fn get_object(&self, id: &str) -> ClientResult<Option<Object>> {
        require("id", id)?;
        self.query(&GET_OBJECT, json!({ "id": id })).await
    }

    /// Replies to a note.
    pub async fn fetch_replies(
        &self,
        object_id: &str,
        page: &PageArgs,
    ) -> ClientResult<Connection<Object>> {
        require("objectId", object_id)?;
        self.paginate(&FETCH_REPLIES, json!({ "objectId": object_id }), page)
            .await
    }

    /// Notes quoting a note.
    pub async fn fetch_quotes(
        &self,
        object_id: &str,
        page: &PageArgs,
    ) -> ClientResult<Connection<Object>> {
        require("objectId", object_id)?;
        self.paginate(&FETCH_QUOTES, json!({ "objectId": object_id }), page)
            .await
    }

    /// The viewer's bookmarks.
    pub async fn fetch_bookmarks(&self, page: &PageArgs) -> ClientResult<Connection<Object>> {
        self.paginate(&FETCH_BOOKMARKS, json!({}), page).await
    }

    /// Publish a note.
    pub async fn create_note(&self, input: &CreateNoteInput) -> ClientResult<Object> {
        self.mutate_input(&CREATE_NOTE, input).await
    }

    /// Edit a note.
    pub async fn update_note(&self, id: &str, input: &UpdateNoteInput) -> ClientResult<Object> {
        require("id", id)?;
        input.validate()?;
        let input = serde_json::to_value(input)?;
        self.mutate(&UPDATE_NOTE, json!({ "id": id, "input": input }))
            .await
    }

    /// Delete a note.
    pub async fn delete_note(&self, id: &str) -> ClientResult<DeleteOutcome> {
        require("id", id)?;
        self.remove(&DELETE_NOTE, json!({ "id": id })).await
    }

    pub async fn like_object(&self, id: &str) -> ClientResult<Object> {
        require("id", id)?;
        self.mutate(&LIKE_OBJECT, json!({ "id": id })).await
    }

    pub async fn unlike_object(&self, id: &str) -> ClientResult<DeleteOutcome> {
        require("id", id)?;
        self.remove(&UNLIKE_OBJECT, json!({ "id": id })).await
    }

    /// Boost a note.
    pub async fn share_object(&self, id: &str) -> ClientResult<Object> {
        require("id", id)?;
        self.mutate(&SHARE_OBJECT, json!({ "id": id })).await
    }

    pub async fn unshare_object(&self, id: &str) -> ClientResult<DeleteOutcome> {
        require("id", id)?;
        self.remove(&UNSHARE_OBJECT, json!({ "id": id })).await
    }

    pub async fn bookmark_object(&self, id: &str) -> ClientResult<Object> {
        require("id", id)?;
        self.mutate(&BOOKMARK_OBJECT, json!({ "id": id })).await
    }

    pub async fn unbookmark_object(&self, id: &str) -> ClientResult<DeleteOutcome> {
        require("id", id)?;
        self.remove(&UNBOOKMARK_OBJECT, json!({ "id": id })).await
    }

    /// Pin a note to the viewer's profile.
    pub async fn pin_object(&self, id: &str) -> ClientResult<Object> {
        require("id", id)?;
        self.mutate(&PIN_OBJECT, json!({ "id": id })).await
    }

    pub async fn unpin_object(&self, id: &str) -> ClientResult<DeleteOutcome> {
        require("id", id)?;
        self.remove(&UNPIN_OBJECT, json!({ "id": id })).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::recording_client;
    use fedigraph_common::ClientError;
    use fedigraph_types::Visibility;
    use serde_json::Value;

    fn note_json(id: &str) -> Value {
        json!({
            "id": id,
            "type": "Note",
            "actor": { "id": "a1", "username": "alice" },
            "content": "hello",
            "published": "2025-03-01T12:00:00Z"
        })
    }

    #[tokio::test]
    async fn test_create_note_sends_input() {
        let (client, transport) = recording_client();
        transport.respond(json!({ "data": { "createNote": note_json("n1") } }));

        let input = CreateNoteInput::new("hello").visibility(Visibility::Unlisted);
        let note = client.create_note(&input).await.unwrap();
        assert_eq!(note.id, "n1");

        let sent = transport.last();
        assert_eq!(sent.operation_name, "CreateNote");
        assert_eq!(sent.variables["input"]["content"], "hello");
        assert_eq!(sent.variables["input"]["visibility"], "UNLISTED");
        assert_eq!(sent.context.bearer.as_deref(), Some("Bearer secret"));
    }

    #[tokio::test]
    async fn test_create_note_validation_happens_before_network() {
        let (client, transport) = recording_client();

        let err = client
            .create_note(&CreateNoteInput::new(""))
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::Validation(_)));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_get_object_missing() {
        let (client, transport) = recording_client();
        transport.respond(json!({ "data": { "object": null } }));

        assert!(client.get_object("gone").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_unlike_missing_target_is_already_absent() {
        let (client, transport) = recording_client();
        transport.respond(json!({
            "data": null,
            "errors": [{ "message": "Missing target id", "extensions": { "code": "MISSING_TARGET_ID" } }]
        }));

        let outcome = client.unlike_object("n1").await.unwrap();
        assert_eq!(outcome, DeleteOutcome::AlreadyAbsent);
    }

    #[tokio::test]
    async fn test_delete_note_other_error_propagates() {
        let (client, transport) = recording_client();
        transport.respond(json!({
            "data": null,
            "errors": [{ "message": "Not your note", "extensions": { "code": "FORBIDDEN" } }]
        }));

        let err = client.delete_note("n1").await.unwrap_err();
        assert_eq!(err.graphql_errors()[0].code(), Some("FORBIDDEN"));
    }

    #[tokio::test]
    async fn test_delete_note_removed() {
        let (client, transport) = recording_client();
        transport.respond(json!({ "data": { "deleteObject": true } }));

        assert_eq!(
            client.delete_note("n1").await.unwrap(),
            DeleteOutcome::Removed
        );
        assert_eq!(transport.last().variables["id"], "n1");
    }

    #[tokio::test]
    async fn test_fetch_replies_keeps_object_id() {
        let (client, transport) = recording_client();
        transport.respond(json!({
            "data": { "replies": {
                "totalCount": 1,
                "edges": [{ "cursor": "c1", "node": note_json("r1") }],
                "pageInfo": { "hasNextPage": true, "hasPreviousPage": false, "endCursor": "c1" }
            } }
        }));

        let page = client
            .fetch_replies("n1", &PageArgs::default())
            .await
            .unwrap();
        assert_eq!(page.next_cursor(), Some("c1"));
        assert_eq!(
            Value::Object(transport.last().variables),
            json!({ "objectId": "n1", "first": 20 })
        );
    }

    #[test]
    fn test_generated_documents() {
        assert!(LIKE_OBJECT.document.starts_with("mutation LikeObject($id: ID!) { likeObject(id: $id)"));
        assert_eq!(
            UNPIN_OBJECT.document,
            "mutation UnpinObject($id: ID!) { unpinObject(id: $id) }"
        );
    }
}
