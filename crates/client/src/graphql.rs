//! GraphQL request and response envelopes.

use fedigraph_common::{ClientError, ClientResult, GraphQlError};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::operation::Operation;

/// Body of a GraphQL request, also the payload of a `subscribe` frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQlRequest {
    pub query: &'static str,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub variables: Map<String, Value>,
    pub operation_name: &'static str,
}

impl GraphQlRequest {
    /// Build the request for `operation`.
    #[must_use]
    pub const fn new(operation: &Operation, variables: Map<String, Value>) -> Self {
        Self {
            query: operation.document,
            variables,
            operation_name: operation.name,
        }
    }
}

/// The `{data, errors}` envelope of a GraphQL response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GraphQlResponse {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

impl GraphQlResponse {
    /// Fail with the server's errors when there are any.
    pub fn into_data(self) -> ClientResult<Value> {
        if !self.errors.is_empty() {
            return Err(ClientError::GraphQl(self.errors));
        }
        Ok(self.data.unwrap_or(Value::Null))
    }

    /// Deserialise `data[root]` into `T`.
    ///
    /// A missing or `null` root is only accepted when `T` itself accepts
    /// `null` (an `Option`); otherwise it is [`ClientError::MissingData`].
    pub fn extract<T: DeserializeOwned>(self, root: &str) -> ClientResult<T> {
        let value = match self.into_data()? {
            Value::Object(mut data) => data.remove(root).unwrap_or(Value::Null),
            _ => Value::Null,
        };

        if value.is_null() {
            return serde_json::from_value(Value::Null)
                .map_err(|_| ClientError::MissingData(root.to_string()));
        }
        Ok(serde_json::from_value(value)?)
    }
}

/// Turn a `json!` object into a variables map. Anything else is empty.
#[must_use]
pub fn into_variables(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(body: Value) -> GraphQlResponse {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_extract_root() {
        let resp = response(json!({ "data": { "likeObject": { "id": "n1", "liked": true } } }));
        let value: Value = resp.extract("likeObject").unwrap();
        assert_eq!(value["liked"], json!(true));
    }

    #[test]
    fn test_errors_passed_through_verbatim() {
        let resp = response(json!({
            "data": null,
            "errors": [{ "message": "Forbidden", "extensions": { "code": "FORBIDDEN" } }]
        }));

        let err = resp.extract::<Value>("deleteObject").unwrap_err();
        let errors = err.graphql_errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "Forbidden");
        assert_eq!(errors[0].code(), Some("FORBIDDEN"));
    }

    #[test]
    fn test_null_root() {
        let resp = response(json!({ "data": { "actor": null } }));
        let actor: Option<Value> = resp.clone().extract("actor").unwrap();
        assert!(actor.is_none());

        let err = resp.extract::<Vec<String>>("actor").unwrap_err();
        assert!(matches!(err, ClientError::MissingData(root) if root == "actor"));
    }

    #[test]
    fn test_request_serialization() {
        let op = Operation::query("GetActor", "actor", "query GetActor($id: ID!) { actor(id: $id) { id } }");
        let request = GraphQlRequest::new(&op, into_variables(json!({ "id": "a1" })));

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "query": "query GetActor($id: ID!) { actor(id: $id) { id } }",
                "variables": { "id": "a1" },
                "operationName": "GetActor"
            })
        );
    }

    #[test]
    fn test_into_variables_non_object() {
        assert!(into_variables(Value::Null).is_empty());
        assert_eq!(into_variables(json!({ "a": 1 })).len(), 1);
    }
}
