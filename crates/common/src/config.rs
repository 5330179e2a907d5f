//! Client configuration.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use url::Url;

use crate::error::{ClientError, ClientResult};

/// Path the upload endpoint defaults to on the GraphQL endpoint's origin.
pub const DEFAULT_UPLOAD_PATH: &str = "/api/v1/media";

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// GraphQL endpoint and request configuration.
    pub client: ClientConfig,
    /// Subscription stream configuration.
    #[serde(default)]
    pub subscriptions: SubscriptionConfig,
    /// Error recognition configuration.
    #[serde(default)]
    pub errors: ErrorConfig,
}

/// GraphQL endpoint configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// GraphQL HTTP endpoint, e.g. `https://social.example/api/graphql`.
    pub endpoint: String,
    /// GraphQL WebSocket endpoint. Derived from `endpoint` when absent.
    #[serde(default)]
    pub ws_endpoint: Option<String>,
    /// Multipart media upload endpoint. Derived from `endpoint` when absent.
    #[serde(default)]
    pub upload_endpoint: Option<String>,
    /// Bearer token sent with every request.
    #[serde(default)]
    pub token: Option<String>,
    /// Static headers added to every request.
    #[serde(default)]
    pub headers: HashMap<String, String>,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Connect timeout in seconds.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// User agent string.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Page size applied when a paginated call gives no `first`.
    #[serde(default = "default_page_size")]
    pub default_page_size: u32,
}

/// Subscription configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SubscriptionConfig {
    /// Seconds to wait for `connection_ack` after `connection_init`.
    #[serde(default = "default_ack_timeout_secs")]
    pub ack_timeout_secs: u64,
    /// Capacity of the hand-off channel between socket task and stream.
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

/// Signature of the server's "missing target id" error.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorConfig {
    /// `extensions.code` values that identify the condition.
    #[serde(default = "default_missing_target_codes")]
    pub missing_target_codes: Vec<String>,
    /// Regex matched against the error message.
    #[serde(default = "default_missing_target_pattern")]
    pub missing_target_pattern: String,
}

const fn default_timeout_secs() -> u64 {
    30
}

const fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    format!("fedigraph/{}", env!("CARGO_PKG_VERSION"))
}

const fn default_page_size() -> u32 {
    20
}

const fn default_ack_timeout_secs() -> u64 {
    10
}

const fn default_channel_capacity() -> usize {
    16
}

fn default_missing_target_codes() -> Vec<String> {
    vec!["MISSING_TARGET_ID".to_string()]
}

fn default_missing_target_pattern() -> String {
    r"(?i)\bmissing target id\b".to_string()
}

impl Default for SubscriptionConfig {
    fn default() -> Self {
        Self {
            ack_timeout_secs: default_ack_timeout_secs(),
            channel_capacity: default_channel_capacity(),
        }
    }
}

impl Default for ErrorConfig {
    fn default() -> Self {
        Self {
            missing_target_codes: default_missing_target_codes(),
            missing_target_pattern: default_missing_target_pattern(),
        }
    }
}

impl ClientConfig {
    /// Create a configuration for `endpoint` with every other field defaulted.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ws_endpoint: None,
            upload_endpoint: None,
            token: None,
            headers: HashMap::new(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            user_agent: default_user_agent(),
            default_page_size: default_page_size(),
        }
    }

    /// Set the bearer token.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Add a static header.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Parsed GraphQL HTTP endpoint.
    pub fn endpoint_url(&self) -> ClientResult<Url> {
        parse_url(&self.endpoint)
    }

    /// WebSocket endpoint: the configured one, or the HTTP endpoint with its
    /// scheme swapped (`http` to `ws`, `https` to `wss`).
    pub fn ws_url(&self) -> ClientResult<Url> {
        if let Some(ws) = &self.ws_endpoint {
            return parse_url(ws);
        }

        let mut url = self.endpoint_url()?;
        let scheme = match url.scheme() {
            "http" => "ws",
            "https" => "wss",
            "ws" | "wss" => return Ok(url),
            other => {
                return Err(ClientError::InvalidUrl(format!(
                    "cannot derive a websocket endpoint from scheme {other}"
                )));
            }
        };
        url.set_scheme(scheme)
            .map_err(|()| ClientError::InvalidUrl(format!("cannot switch scheme to {scheme}")))?;
        Ok(url)
    }

    /// Upload endpoint: the configured one, or [`DEFAULT_UPLOAD_PATH`] on the
    /// HTTP endpoint's origin.
    pub fn upload_url(&self) -> ClientResult<Url> {
        if let Some(upload) = &self.upload_endpoint {
            return parse_url(upload);
        }

        let endpoint = self.endpoint_url()?;
        endpoint
            .join(DEFAULT_UPLOAD_PATH)
            .map_err(|e| ClientError::InvalidUrl(e.to_string()))
    }
}

fn parse_url(raw: &str) -> ClientResult<Url> {
    Url::parse(raw).map_err(|e| ClientError::InvalidUrl(format!("{raw}: {e}")))
}

impl Config {
    /// Build a configuration around a client section, defaulting the rest.
    #[must_use]
    pub fn with_client(client: ClientConfig) -> Self {
        Self {
            client,
            subscriptions: SubscriptionConfig::default(),
            errors: ErrorConfig::default(),
        }
    }

    /// Load configuration from files and environment variables.
    ///
    /// Configuration is loaded in the following order:
    /// 1. `config/default.toml`
    /// 2. `config/{environment}.toml` (based on `FEDIGRAPH_ENV`)
    /// 3. Environment variables with `FEDIGRAPH__` prefix
    pub fn load() -> Result<Self, config::ConfigError> {
        let env = std::env::var("FEDIGRAPH_ENV").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("FEDIGRAPH")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Load configuration from a specific file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(
                config::Environment::with_prefix("FEDIGRAPH")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
