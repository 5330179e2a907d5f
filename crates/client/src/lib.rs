//! GraphQL client adapter for fedigraph.
//!
//! [`FediClient`] wraps one GraphQL endpoint of a federated social server:
//!
//! - **Queries and mutations** over HTTP via a pluggable [`Transport`]
//! - **Subscriptions** over `graphql-transport-ws`, one socket per stream
//! - **Media uploads** as `multipart/form-data`
//! - **Idempotent removal**: undo and delete calls report [`DeleteOutcome`]
//!   instead of failing when the target is already gone
//!
//! # Example
//!
//! ```no_run
//! use fedigraph_client::{FediClient, PageArgs, TimelineKind};
//! use fedigraph_common::{ClientResult, Config};
//!
//! async fn example() -> ClientResult<()> {
//!     let client = FediClient::new(&Config::load()?)?;
//!     let page = client
//!         .fetch_timeline(&TimelineKind::Home, &PageArgs::first(10))
//!         .await?;
//!     for note in page.nodes() {
//!         println!("{}: {}", note.actor.handle(), note.content);
//!     }
//!     client.close();
//!     Ok(())
//! }
//! ```

#[macro_use]
mod fragments;

pub mod auth;
pub mod client;
pub mod graphql;
pub mod missing_target;
pub mod operation;
pub mod operations;
pub mod pagination;
pub mod subscription;
pub mod transport;
pub mod upload;

#[cfg(test)]
mod testing;

pub use client::FediClient;
pub use graphql::{GraphQlRequest, GraphQlResponse};
pub use missing_target::{DeleteOutcome, MissingTargetSignature, is_missing_target_id};
pub use operation::{Operation, OperationKind};
pub use operations::TimelineKind;
pub use operations::actors::MuteOptions;
pub use pagination::PageArgs;
pub use subscription::{SubscriptionConnector, SubscriptionStream};
pub use transport::{HttpTransport, RequestContext, Transport};
pub use upload::MediaUpload;

pub use fedigraph_common as common;
pub use fedigraph_types as types;
