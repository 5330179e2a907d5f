//! Search result read model.

use serde::{Deserialize, Serialize};

use crate::{actor::Actor, hashtag::Hashtag, object::Object};

/// Which collections `search` looks in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SearchType {
    /// Every kind
    #[default]
    All,
    /// Actors only
    Accounts,
    /// Notes only
    Statuses,
    /// Hashtags only
    Hashtags,
}

/// Results of a search, grouped by kind.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResult {
    /// Matching actors
    pub accounts: Vec<Actor>,
    /// Matching notes
    pub statuses: Vec<Object>,
    /// Matching hashtags
    pub hashtags: Vec<Hashtag>,
}

impl SearchResult {
    /// Whether nothing matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty() && self.statuses.is_empty() && self.hashtags.is_empty()
    }
}
