//! GraphQL error wire type.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// One entry of a GraphQL response's `errors` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphQlError {
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<GraphQlLocation>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub path: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Map<String, Value>>,
}

/// Source location of a GraphQL error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphQlLocation {
    pub line: u32,
    pub column: u32,
}

impl GraphQlError {
    /// Create an error carrying only a message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            locations: Vec::new(),
            path: Vec::new(),
            extensions: None,
        }
    }

    /// Attach an `extensions.code` value.
    #[must_use]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.extensions
            .get_or_insert_with(Map::new)
            .insert("code".to_string(), Value::String(code.into()));
        self
    }

    /// The `extensions.code` value, if the server sent one.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.extensions.as_ref()?.get("code")?.as_str()
    }
}

impl fmt::Display for GraphQlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code() {
            Some(code) => write!(f, "{} ({code})", self.message),
            None => f.write_str(&self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_from_extensions() {
        let err: GraphQlError = serde_json::from_value(serde_json::json!({
            "message": "Object not found",
            "path": ["deleteObject"],
            "extensions": { "code": "NOT_FOUND" }
        }))
        .unwrap();

        assert_eq!(err.code(), Some("NOT_FOUND"));
        assert_eq!(err.to_string(), "Object not found (NOT_FOUND)");
    }

    #[test]
    fn test_code_absent() {
        let err: GraphQlError =
            serde_json::from_value(serde_json::json!({ "message": "boom" })).unwrap();
        assert_eq!(err.code(), None);
        assert!(err.locations.is_empty());
    }
}
