//! Direct-message conversation read model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{actor::Actor, object::Object};

/// A direct-message thread.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    /// Conversation ID
    pub id: String,
    /// Participants other than the viewer.
    pub accounts: Vec<Actor>,
    /// Most recent note
    #[serde(default)]
    pub last_status: Option<Object>,
    /// Has unread notes
    #[serde(default)]
    pub unread: bool,
    /// Last activity
    pub updated_at: DateTime<Utc>,
}
