//! Schema read models for fedigraph.
//!
//! Every type here mirrors a shape defined by the server's GraphQL schema.
//! The client never creates or mutates these entities locally; it only
//! deserialises what the server returns and serialises mutation inputs.
//!
//! - **Connection**: the cursor-paginated `{ totalCount, edges, pageInfo }` shape
//! - **Social graph**: [`Actor`], [`Object`], [`Activity`], [`Relationship`]
//! - **Aggregates**: [`Notification`], [`Conversation`], [`List`], [`Hashtag`]
//! - **Moderation and trust**: [`CommunityNote`], [`ModerationPattern`], [`AiAnalysis`], [`TrustScore`]
//! - **Operations**: [`CostBreakdown`], [`InstanceBudget`], [`FederationLimit`], [`FederationHealth`]

#![deny(missing_docs)]

pub mod activity;
pub mod actor;
pub mod connection;
pub mod conversation;
pub mod cost;
pub mod federation;
pub mod hashtag;
pub mod list;
pub mod media;
pub mod moderation;
pub mod notification;
pub mod object;
pub mod relationship;
pub mod search;
pub mod trust;

pub use activity::{Activity, ActivityType};
pub use actor::{Actor, ProfileField, ProfileFieldInput, UpdateProfileInput};
pub use connection::{Connection, Edge, PageInfo};
pub use conversation::Conversation;
pub use cost::{
    AlertLevel, BudgetAlert, CostAlert, CostAlertType, CostBreakdown, CostItem, FederationLimit,
    FederationLimitInput, InstanceBudget, InstanceBudgetInput, Period,
};
pub use federation::{
    FederationHealth, FederationHealthUpdate, HealthIssue, HealthStatus, MetricsUpdate,
    PerformanceAlert,
};
pub use hashtag::{Hashtag, HashtagUsage, normalize_tag};
pub use list::{CreateListInput, List, RepliesPolicy, UpdateListInput};
pub use media::{Media, MediaType};
pub use moderation::{
    AiAnalysis, CommunityNote, CommunityNoteInput, FlagInput, ModerationAction, ModerationAlert,
    ModerationEvent, ModerationPattern, ModerationPatternInput, ModerationQueueItem,
    ModerationReport, PatternKind, Severity, TextAnalysis,
};
pub use notification::{Notification, NotificationFilter, NotificationType};
pub use object::{
    CreateNoteInput, Mention, Object, ObjectType, QuotePermission, Tag, UpdateNoteInput,
    Visibility,
};
pub use relationship::Relationship;
pub use search::{SearchResult, SearchType};
pub use trust::{TrustCategory, TrustInput, TrustScore, TrustUpdate};
