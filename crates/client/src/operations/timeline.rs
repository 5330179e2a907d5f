//! Timelines.

use fedigraph_common::ClientResult;
use fedigraph_types::{Connection, Object, normalize_tag};
use serde_json::{Value, json};

use super::require;
use crate::client::FediClient;
use crate::operation::Operation;
use crate::pagination::PageArgs;

/// Which timeline to read or follow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimelineKind {
    /// Accounts the viewer follows.
    Home,
    /// Everything the instance knows about.
    Public,
    /// Posts from local accounts.
    Local,
    /// Direct messages.
    Direct,
    /// Members of a list.
    List(String),
    /// Posts carrying a hashtag, with or without the leading `#`.
    Hashtag(String),
    /// Posts by one actor.
    Actor(String),
}

impl TimelineKind {
    /// `TimelineType` enum value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "HOME",
            Self::Public => "PUBLIC",
            Self::Local => "LOCAL",
            Self::Direct => "DIRECT",
            Self::List(_) => "LIST",
            Self::Hashtag(_) => "HASHTAG",
            Self::Actor(_) => "ACTOR",
        }
    }

    pub(crate) fn variables(&self) -> ClientResult<Value> {
        let mut variables = json!({ "type": self.as_str() });
        match self {
            Self::List(id) => {
                require("listId", id)?;
                variables["listId"] = json!(id);
            }
            Self::Hashtag(tag) => {
                let tag = normalize_tag(tag);
                require("hashtag", tag)?;
                variables["hashtag"] = json!(tag);
            }
            Self::Actor(id) => {
                require("actorId", id)?;
                variables["actorId"] = json!(id);
            }
            Self::Home | Self::Public | Self::Local | Self::Direct => {}
        }
        Ok(variables)
    }
}

const FETCH_TIMELINE: Operation = Operation::query(
    "FetchTimeline",
    "timeline",
    concat!(
        "query FetchTimeline($type: TimelineType!, $listId: ID, $hashtag: String, $actorId: ID, ",
        page_vars!(),
        ") { timeline(type: $type, listId: $listId, hashtag: $hashtag, actorId: $actorId, ",
        page_args!(),
        ") ",
        connection_of!("ObjectFields"),
        " }",
        object_document!()
    ),
);

impl FediClient {
    /// One page of a timeline, newest first.
    pub async fn fetch_timeline(
        &self,
        kind: &TimelineKind,
        page: &PageArgs,
    ) -> ClientResult<Connection<Object>> {
        self.paginate(&FETCH_TIMELINE, kind.variables()?, page).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::recording_client;
    use fedigraph_common::ClientError;

    #[tokio::test]
    async fn test_fetch_timeline_defaults_page_size() {
        let (client, transport) = recording_client();
        transport.respond(json!({
            "data": { "timeline": {
                "totalCount": 0,
                "edges": [],
                "pageInfo": { "hasNextPage": false, "hasPreviousPage": false }
            } }
        }));

        let page = client
            .fetch_timeline(&TimelineKind::Home, &PageArgs::default())
            .await
            .unwrap();
        assert!(page.is_empty());

        let sent = transport.last();
        assert_eq!(sent.operation_name, "FetchTimeline");
        assert_eq!(sent.query, FETCH_TIMELINE.document);
        assert!(sent.query.starts_with("query FetchTimeline"));
        assert_eq!(
            Value::Object(sent.variables),
            json!({ "type": "HOME", "first": 20 })
        );
    }

    #[tokio::test]
    async fn test_hashtag_timeline_variables() {
        let (client, transport) = recording_client();
        transport.respond(json!({
            "data": { "timeline": {
                "edges": [],
                "pageInfo": { "hasNextPage": false, "hasPreviousPage": false }
            } }
        }));

        client
            .fetch_timeline(
                &TimelineKind::Hashtag("#rust".to_string()),
                &PageArgs::after("c1").limit(5),
            )
            .await
            .unwrap();

        assert_eq!(
            Value::Object(transport.last().variables),
            json!({ "type": "HASHTAG", "hashtag": "rust", "first": 5, "after": "c1" })
        );
    }

    #[tokio::test]
    async fn test_empty_list_id_rejected_locally() {
        let (client, transport) = recording_client();

        let err = client
            .fetch_timeline(&TimelineKind::List(String::new()), &PageArgs::default())
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::Validation(_)));
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn test_document_includes_fragments_once() {
        let doc = FETCH_TIMELINE.document;
        assert_eq!(doc.matches("fragment ObjectFields").count(), 1);
        assert_eq!(doc.matches("fragment ActorFields").count(), 1);
        assert_eq!(doc.matches("fragment MediaFields").count(), 1);
        assert!(doc.contains("pageInfo { hasNextPage"));
    }
}
