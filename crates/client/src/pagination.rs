//! Cursor pagination arguments.

use fedigraph_types::Connection;
use serde_json::{Map, Value};

/// Relay-style page request. Forward (`first`/`after`) and backward
/// (`last`/`before`) paging are mutually exclusive; backward wins when both
/// are set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageArgs {
    pub first: Option<u32>,
    pub after: Option<String>,
    pub last: Option<u32>,
    pub before: Option<String>,
}

impl PageArgs {
    /// First `n` items.
    #[must_use]
    pub const fn first(n: u32) -> Self {
        Self {
            first: Some(n),
            after: None,
            last: None,
            before: None,
        }
    }

    /// Items after `cursor`, at the default page size.
    #[must_use]
    pub fn after(cursor: impl Into<String>) -> Self {
        Self {
            after: Some(cursor.into()),
            ..Self::default()
        }
    }

    /// Last `n` items before `cursor`.
    #[must_use]
    pub fn before(cursor: impl Into<String>, n: u32) -> Self {
        Self {
            last: Some(n),
            before: Some(cursor.into()),
            ..Self::default()
        }
    }

    /// Set the page size.
    #[must_use]
    pub const fn limit(mut self, n: u32) -> Self {
        self.first = Some(n);
        self
    }

    /// Arguments for the page following `connection`, keeping this page's
    /// size. `None` when there is no next page.
    #[must_use]
    pub fn next<T>(&self, connection: &Connection<T>) -> Option<Self> {
        let cursor = connection.next_cursor()?;
        Some(Self {
            first: self.first,
            after: Some(cursor.to_string()),
            last: None,
            before: None,
        })
    }

    const fn is_backward(&self) -> bool {
        self.last.is_some() || self.before.is_some()
    }

    /// Write the pagination variables into `variables`, defaulting the page
    /// size to `default_first`. Other keys are left untouched.
    pub fn apply(&self, variables: &mut Map<String, Value>, default_first: u32) {
        if self.is_backward() {
            variables.insert(
                "last".to_string(),
                Value::from(self.last.unwrap_or(default_first)),
            );
            if let Some(before) = &self.before {
                variables.insert("before".to_string(), Value::from(before.as_str()));
            }
            return;
        }

        variables.insert(
            "first".to_string(),
            Value::from(self.first.unwrap_or(default_first)),
        );
        if let Some(after) = &self.after {
            variables.insert("after".to_string(), Value::from(after.as_str()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn vars(value: Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn test_defaults_first_and_keeps_other_variables() {
        let mut variables = vars(json!({ "type": "HOME", "mediaOnly": true }));
        PageArgs::default().apply(&mut variables, 20);

        assert_eq!(
            Value::Object(variables),
            json!({ "type": "HOME", "mediaOnly": true, "first": 20 })
        );
    }

    #[test]
    fn test_explicit_forward_page() {
        let mut variables = Map::new();
        PageArgs::after("c42").limit(5).apply(&mut variables, 20);

        assert_eq!(Value::Object(variables), json!({ "first": 5, "after": "c42" }));
    }

    #[test]
    fn test_backward_page() {
        let mut variables = Map::new();
        PageArgs::before("c9", 10).apply(&mut variables, 20);

        assert_eq!(Value::Object(variables), json!({ "last": 10, "before": "c9" }));
    }

    #[test]
    fn test_next_page() {
        let connection: Connection<Value> = serde_json::from_value(json!({
            "totalCount": 3,
            "edges": [{ "cursor": "a", "node": 1 }, { "cursor": "b", "node": 2 }],
            "pageInfo": { "hasNextPage": true, "hasPreviousPage": false, "endCursor": "b" }
        }))
        .unwrap();

        let next = PageArgs::first(2).next(&connection).unwrap();
        assert_eq!(next.after.as_deref(), Some("b"));
        assert_eq!(next.first, Some(2));
    }

    #[test]
    fn test_no_next_page() {
        let connection: Connection<Value> = Connection::empty();
        assert!(PageArgs::default().next(&connection).is_none());
    }
}
