//! Search.

use fedigraph_common::ClientResult;
use fedigraph_types::{SearchResult, SearchType};
use serde_json::json;

use super::require;
use crate::client::FediClient;
use crate::operation::Operation;
use crate::pagination::PageArgs;

const SEARCH: Operation = Operation::query(
    "Search",
    "search",
    concat!(
        "query Search($query: String!, $type: SearchType, ",
        page_vars!(),
        ") { search(query: $query, type: $type, ",
        page_args!(),
        ") { accounts { ...ActorFields } statuses { ...ObjectFields } hashtags { ...HashtagFields } } }",
        hashtag_fields!(),
        object_document!()
    ),
);

impl FediClient {
    /// Search accounts, notes and hashtags. `page` sizes each group.
    pub async fn search(
        &self,
        query: &str,
        kind: SearchType,
        page: &PageArgs,
    ) -> ClientResult<SearchResult> {
        let query = query.trim();
        require("query", query)?;

        let mut variables = serde_json::Map::new();
        variables.insert("query".to_string(), json!(query));
        variables.insert("type".to_string(), serde_json::to_value(kind)?);
        page.apply(&mut variables, self.default_page_size());

        self.query(&SEARCH, serde_json::Value::Object(variables))
            .await
    }
}
