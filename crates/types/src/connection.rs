//! Cursor-based connection shape shared by every paginated result.

use serde::{Deserialize, Serialize};

/// A page of `T` in `{ totalCount, edges, pageInfo }` form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection<T> {
    /// Total number of nodes across all pages, when the server counts them.
    #[serde(default)]
    pub total_count: i64,
    /// Items with their cursors
    pub edges: Vec<Edge<T>>,
    /// Paging state
    pub page_info: PageInfo,
}

/// A node with its cursor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Edge<T> {
    /// Opaque position of this item
    pub cursor: String,
    /// The item
    pub node: T,
}

/// Pagination state of a connection.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// More items after `end_cursor`
    pub has_next_page: bool,
    /// More items before `start_cursor`
    pub has_previous_page: bool,
    /// Cursor of the first edge
    #[serde(default)]
    pub start_cursor: Option<String>,
    /// Cursor of the last edge
    #[serde(default)]
    pub end_cursor: Option<String>,
}

impl<T> Connection<T> {
    /// An empty page.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            total_count: 0,
            edges: Vec::new(),
            page_info: PageInfo::default(),
        }
    }

    /// Nodes of this page in order.
    pub fn nodes(&self) -> impl Iterator<Item = &T> {
        self.edges.iter().map(|edge| &edge.node)
    }

    /// Consume the page, keeping only the nodes.
    #[must_use]
    pub fn into_nodes(self) -> Vec<T> {
        self.edges.into_iter().map(|edge| edge.node).collect()
    }

    /// Cursor to pass as `after` for the next page, if there is one.
    #[must_use]
    pub fn next_cursor(&self) -> Option<&str> {
        if !self.page_info.has_next_page {
            return None;
        }
        self.page_info
            .end_cursor
            .as_deref()
            .or_else(|| self.edges.last().map(|edge| edge.cursor.as_str()))
    }

    /// Number of nodes on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether this page has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(has_next: bool, end_cursor: Option<&str>) -> Connection<String> {
        serde_json::from_value(serde_json::json!({
            "totalCount": 3,
            "edges": [
                { "cursor": "c1", "node": "a" },
                { "cursor": "c2", "node": "b" }
            ],
            "pageInfo": {
                "hasNextPage": has_next,
                "hasPreviousPage": false,
                "startCursor": "c1",
                "endCursor": end_cursor
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_deserialize_connection() {
        let conn = page(true, Some("c2"));
        assert_eq!(conn.total_count, 3);
        assert_eq!(conn.len(), 2);
        assert_eq!(conn.nodes().cloned().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(conn.page_info.start_cursor.as_deref(), Some("c1"));
    }

    #[test]
    fn test_next_cursor_none_on_last_page() {
        assert_eq!(page(false, Some("c2")).next_cursor(), None);
    }

    #[test]
    fn test_next_cursor_falls_back_to_last_edge() {
        assert_eq!(page(true, None).next_cursor(), Some("c2"));
        assert_eq!(page(true, Some("end")).next_cursor(), Some("end"));
    }

    #[test]
    fn test_into_nodes() {
        assert_eq!(page(false, None).into_nodes(), vec!["a", "b"]);
        assert!(Connection::<String>::empty().is_empty());
    }
}
