//! Common utilities and shared types for fedigraph.
//!
//! This crate provides foundational components used across all fedigraph crates:
//!
//! - **Configuration**: Endpoint, subscription and error settings via [`Config`]
//! - **Error handling**: Unified error types via [`ClientError`] and [`ClientResult`]
//! - **GraphQL errors**: The `errors[]` wire entry via [`GraphQlError`]
//! - **ID Generation**: Subscription and request ids via [`IdGenerator`]
//!
//! # Example
//!
//! ```no_run
//! use fedigraph_common::{ClientResult, Config};
//!
//! fn example() -> ClientResult<()> {
//!     let config = Config::load()?;
//!     println!("GraphQL endpoint: {}", config.client.endpoint_url()?);
//!     println!("Subscriptions at: {}", config.client.ws_url()?);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod graphql;
pub mod id;

pub use config::{ClientConfig, Config, ErrorConfig, SubscriptionConfig};
pub use error::{ClientError, ClientResult};
pub use graphql::{GraphQlError, GraphQlLocation};
pub use id::IdGenerator;
