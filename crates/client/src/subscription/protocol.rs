//! `graphql-transport-ws` frames.

use fedigraph_common::GraphQlError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::graphql::{GraphQlRequest, GraphQlResponse};

/// WebSocket subprotocol negotiated on connect.
pub const SUBPROTOCOL: &str = "graphql-transport-ws";

/// Client-to-server frame.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage<'a> {
    /// First frame on a connection. Carries the bearer credential.
    ConnectionInit {
        #[serde(skip_serializing_if = "Option::is_none")]
        payload: Option<Value>,
    },
    /// Start the operation under `id`.
    Subscribe {
        id: &'a str,
        payload: &'a GraphQlRequest,
    },
    /// Stop the operation under `id`.
    Complete { id: &'a str },
    Ping,
    Pong,
}

impl ClientMessage<'_> {
    /// `connection_init` with an `Authorization` entry when a bearer is set.
    #[must_use]
    pub fn init(bearer: Option<&str>) -> Self {
        Self::ConnectionInit {
            payload: bearer.map(|b| serde_json::json!({ "Authorization": b })),
        }
    }

    /// Serialised text frame.
    pub fn to_text(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Server-to-client frame.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    ConnectionAck {
        #[serde(default)]
        payload: Option<Value>,
    },
    /// One execution result for operation `id`.
    Next { id: String, payload: GraphQlResponse },
    /// Operation `id` failed before producing results. Ends the operation.
    Error {
        id: String,
        payload: Vec<GraphQlError>,
    },
    /// Operation `id` finished.
    Complete { id: String },
    Ping {
        #[serde(default)]
        payload: Option<Value>,
    },
    Pong {
        #[serde(default)]
        payload: Option<Value>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphql::into_variables;
    use crate::operation::Operation;
    use serde_json::json;

    #[test]
    fn test_init_with_bearer() {
        let text = ClientMessage::init(Some("Bearer tok")).to_text().unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(
            value,
            json!({ "type": "connection_init", "payload": { "Authorization": "Bearer tok" } })
        );
    }

    #[test]
    fn test_init_without_bearer() {
        let text = ClientMessage::init(None).to_text().unwrap();
        assert_eq!(text, r#"{"type":"connection_init"}"#);
    }

    #[test]
    fn test_subscribe_and_complete() {
        let op = Operation::subscription(
            "OnNotification",
            "notificationAdded",
            "subscription OnNotification { notificationAdded { id } }",
        );
        let request = GraphQlRequest::new(&op, into_variables(json!({})));

        let subscribe: Value =
            serde_json::from_str(&ClientMessage::Subscribe { id: "s1", payload: &request }.to_text().unwrap())
                .unwrap();
        assert_eq!(subscribe["type"], "subscribe");
        assert_eq!(subscribe["id"], "s1");
        assert_eq!(subscribe["payload"]["operationName"], "OnNotification");

        let complete = ClientMessage::Complete { id: "s1" }.to_text().unwrap();
        assert_eq!(complete, r#"{"type":"complete","id":"s1"}"#);

        assert_eq!(ClientMessage::Pong.to_text().unwrap(), r#"{"type":"pong"}"#);
    }

    #[test]
    fn test_parse_server_frames() {
        let ack: ServerMessage = serde_json::from_str(r#"{"type":"connection_ack"}"#).unwrap();
        assert!(matches!(ack, ServerMessage::ConnectionAck { payload: None }));

        let next: ServerMessage = serde_json::from_value(json!({
            "type": "next",
            "id": "s1",
            "payload": { "data": { "notificationAdded": { "id": "n1" } } }
        }))
        .unwrap();
        match next {
            ServerMessage::Next { id, payload } => {
                assert_eq!(id, "s1");
                assert!(payload.errors.is_empty());
            }
            other => panic!("unexpected frame {other:?}"),
        }

        let error: ServerMessage = serde_json::from_value(json!({
            "type": "error",
            "id": "s1",
            "payload": [{ "message": "Unauthorized" }]
        }))
        .unwrap();
        assert!(matches!(error, ServerMessage::Error { payload, .. } if payload[0].message == "Unauthorized"));

        let ping: ServerMessage = serde_json::from_str(r#"{"type":"ping"}"#).unwrap();
        assert!(matches!(ping, ServerMessage::Ping { .. }));
    }
}
