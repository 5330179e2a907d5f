//! Object (note) read model and note inputs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{actor::Actor, media::Media};

/// Maximum note length accepted by `createNote`.
pub const MAX_NOTE_LENGTH: u64 = 5000;

/// Object kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectType {
    /// Short post
    Note,
    /// Long-form post
    Article,
    /// Poll
    Question,
    /// Web page
    Page,
    /// Type this client does not know yet
    #[serde(other)]
    Unknown,
}

/// Audience of an object.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Visibility {
    /// Everyone, listed on public timelines
    #[default]
    Public,
    /// Everyone, kept off public timelines
    Unlisted,
    /// Followers only
    Followers,
    /// Mentioned actors only
    Direct,
}

/// Who may quote an object.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuotePermission {
    /// Anyone may quote
    #[default]
    Everyone,
    /// Followers may quote
    Followers,
    /// Nobody may quote
    None,
}

/// A unit of federated content.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Object {
    /// Object ID (ActivityPub URI)
    pub id: String,
    /// Object type
    #[serde(rename = "type")]
    pub kind: ObjectType,
    /// Author
    pub actor: Actor,
    /// Body (HTML)
    pub content: String,
    /// Parent object, for replies
    #[serde(default)]
    pub in_reply_to_id: Option<String>,
    /// Audience
    #[serde(default)]
    pub visibility: Visibility,
    /// Hidden behind a warning
    #[serde(default)]
    pub sensitive: bool,
    /// Content warning
    #[serde(default)]
    pub spoiler_text: Option<String>,
    /// Attached media
    #[serde(default)]
    pub attachments: Vec<Media>,
    /// Hashtags
    #[serde(default)]
    pub tags: Vec<Tag>,
    /// Mentioned actors
    #[serde(default)]
    pub mentions: Vec<Mention>,
    /// Reply count
    #[serde(default)]
    pub replies_count: i64,
    /// Favourite count
    #[serde(default)]
    pub likes_count: i64,
    /// Boost count
    #[serde(default)]
    pub shares_count: i64,
    /// Server-assigned moderation score in `[0, 1]`, when analysed.
    #[serde(default)]
    pub moderation_score: Option<f64>,
    /// Quoted object URL
    #[serde(default)]
    pub quote_url: Option<String>,
    /// Times quoted
    #[serde(default)]
    pub quote_count: i64,
    /// Who may quote it
    #[serde(default)]
    pub quote_permission: QuotePermission,
    /// Viewer favourited it
    #[serde(default)]
    pub liked: bool,
    /// Viewer boosted it
    #[serde(default)]
    pub shared: bool,
    /// Viewer bookmarked it
    #[serde(default)]
    pub bookmarked: bool,
    /// Pinned to the author's profile
    #[serde(default)]
    pub pinned: bool,
    /// Publication time
    pub published: DateTime<Utc>,
    /// Last edit
    #[serde(default)]
    pub updated: Option<DateTime<Utc>>,
}

/// A hashtag attached to an object.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Tag name without `#`
    pub name: String,
    /// Tag page URL
    #[serde(default)]
    pub url: Option<String>,
}

/// An actor mentioned in an object.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mention {
    /// Mentioned actor ID
    pub id: String,
    /// Username
    pub username: String,
    /// Home instance, for remote actors
    #[serde(default)]
    pub domain: Option<String>,
}

impl Object {
    /// Whether this object quotes another.
    #[must_use]
    pub const fn is_quote(&self) -> bool {
        self.quote_url.is_some()
    }

    /// Whether this object replies to another.
    #[must_use]
    pub const fn is_reply(&self) -> bool {
        self.in_reply_to_id.is_some()
    }
}

/// Input for `createNote`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateNoteInput {
    /// Body text
    #[validate(length(min = 1, max = 5000))]
    pub content: String,
    /// Audience
    pub visibility: Visibility,
    /// Hide behind a warning
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub sensitive: bool,
    /// Content warning
    #[validate(length(max = 500))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spoiler_text: Option<String>,
    /// Parent object, for replies
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_reply_to_id: Option<String>,
    /// Previously uploaded media
    #[validate(length(max = 4))]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attachment_ids: Vec<String>,
    /// Object being quoted.
    #[validate(url)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote_url: Option<String>,
    /// Who may quote it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote_permission: Option<QuotePermission>,
    /// BCP 47 language tag.
    #[validate(length(min = 2, max = 16))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl CreateNoteInput {
    /// A public note with `content` and everything else defaulted.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// Set the audience.
    #[must_use]
    pub const fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Reply to `object_id`.
    #[must_use]
    pub fn reply_to(mut self, object_id: impl Into<String>) -> Self {
        self.in_reply_to_id = Some(object_id.into());
        self
    }

    /// Quote `object_url`.
    #[must_use]
    pub fn quote(mut self, object_url: impl Into<String>) -> Self {
        self.quote_url = Some(object_url.into());
        self
    }

    /// Mark sensitive behind `spoiler_text`.
    #[must_use]
    pub fn spoiler(mut self, spoiler_text: impl Into<String>) -> Self {
        self.sensitive = true;
        self.spoiler_text = Some(spoiler_text.into());
        self
    }
}

/// Input for `updateNote`. Absent fields are left unchanged.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNoteInput {
    /// New body text
    #[validate(length(min = 1, max = 5000))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Hide behind a warning
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensitive: Option<bool>,
    /// New content warning
    #[validate(length(max = 500))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spoiler_text: Option<String>,
}
