//! In-memory transport for unit tests.

use async_trait::async_trait;
use fedigraph_common::{ClientConfig, ClientResult, Config, ErrorConfig, SubscriptionConfig};
use serde_json::{Map, Value, json};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::client::FediClient;
use crate::graphql::{GraphQlRequest, GraphQlResponse};
use crate::transport::{RequestContext, Transport};
use crate::upload::MediaUpload;

/// A request as the transport saw it.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub operation_name: &'static str,
    pub query: &'static str,
    pub variables: Map<String, Value>,
    pub context: RequestContext,
}

/// Records every request and answers from a queue of canned envelopes.
/// An empty queue answers `{"data": null}`.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    requests: Mutex<Vec<Recorded>>,
    responses: Mutex<VecDeque<Value>>,
}

impl RecordingTransport {
    pub fn respond(&self, envelope: Value) {
        self.responses.lock().unwrap().push_back(envelope);
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last(&self) -> Recorded {
        self.requests().pop().unwrap()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn execute(
        &self,
        request: &GraphQlRequest,
        context: &RequestContext,
    ) -> ClientResult<GraphQlResponse> {
        self.requests.lock().unwrap().push(Recorded {
            operation_name: request.operation_name,
            query: request.query,
            variables: request.variables.clone(),
            context: context.clone(),
        });

        let envelope = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| json!({ "data": null }));
        Ok(serde_json::from_value(envelope)?)
    }

    async fn upload(&self, upload: MediaUpload, context: &RequestContext) -> ClientResult<Value> {
        self.requests.lock().unwrap().push(Recorded {
            operation_name: "upload",
            query: "",
            variables: Map::new(),
            context: context.clone(),
        });
        Ok(json!({
            "id": "m1",
            "type": upload.media_type(),
            "url": format!("https://cdn.example/{}", upload.file_name),
            "description": upload.description,
        }))
    }
}

pub fn test_config() -> Config {
    Config {
        client: ClientConfig::new("http://localhost:3000/graphql").with_token("secret"),
        subscriptions: SubscriptionConfig::default(),
        errors: ErrorConfig::default(),
    }
}

pub fn recording_client() -> (FediClient, Arc<RecordingTransport>) {
    let transport = Arc::new(RecordingTransport::default());
    let client = FediClient::with_transport(transport.clone(), &test_config()).unwrap();
    (client, transport)
}
