//! GraphQL transport.
//!
//! [`Transport`] is the seam between the adapter and the network. The
//! adapter builds typed requests and interprets responses; a transport only
//! moves bytes. [`HttpTransport`] is the `reqwest` implementation.

use async_trait::async_trait;
use fedigraph_common::{ClientConfig, ClientError, ClientResult};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, RequestBuilder, Response};
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, error, warn};
use url::Url;

use crate::graphql::{GraphQlRequest, GraphQlResponse};
use crate::upload::MediaUpload;

/// Per-request metadata added by the adapter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    /// Full `Authorization` header value, when a token is set.
    pub bearer: Option<String>,
    /// Value of the `x-request-id` header.
    pub request_id: String,
}

/// Moves GraphQL requests and media uploads to the server.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send one GraphQL request and return the raw envelope.
    ///
    /// A response that carries GraphQL `errors` is still `Ok`; only failures
    /// to obtain an envelope are errors here.
    async fn execute(
        &self,
        request: &GraphQlRequest,
        context: &RequestContext,
    ) -> ClientResult<GraphQlResponse>;

    /// Post a multipart media upload and return the JSON answer.
    async fn upload(&self, upload: MediaUpload, context: &RequestContext) -> ClientResult<Value>;
}

/// `reqwest`-backed transport.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint: Url,
    upload_endpoint: Url,
}

impl HttpTransport {
    /// Build the HTTP client from configuration. Static headers, user agent
    /// and timeouts apply to every request.
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .user_agent(&config.user_agent)
            .default_headers(header_map(&config.headers)?)
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint_url()?,
            upload_endpoint: config.upload_url()?,
        })
    }

    /// GraphQL endpoint requests are posted to.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Endpoint media uploads are posted to.
    #[must_use]
    pub const fn upload_endpoint(&self) -> &Url {
        &self.upload_endpoint
    }

    fn authorize(builder: RequestBuilder, context: &RequestContext) -> RequestBuilder {
        let builder = builder.header("x-request-id", &context.request_id);
        match &context.bearer {
            Some(bearer) => builder.header(AUTHORIZATION, bearer),
            None => builder,
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(
        &self,
        request: &GraphQlRequest,
        context: &RequestContext,
    ) -> ClientResult<GraphQlResponse> {
        debug!(
            operation = request.operation_name,
            endpoint = %self.endpoint,
            request_id = %context.request_id,
            "Sending GraphQL request"
        );

        let builder = self.client.post(self.endpoint.clone()).json(request);
        let response = Self::authorize(builder, context).send().await?;
        let status = response.status();
        let body = response.text().await?;

        // GraphQL servers may answer errors with a non-2xx status; the
        // envelope is what counts whenever one is present.
        let parsed = serde_json::from_str::<GraphQlResponse>(&body);
        if status.is_success() {
            return Ok(parsed?);
        }

        match parsed {
            Ok(envelope) if !envelope.errors.is_empty() => Ok(envelope),
            _ => {
                error!(
                    operation = request.operation_name,
                    status = %status,
                    body = %body,
                    "GraphQL request failed"
                );
                Err(ClientError::Status {
                    status: status.as_u16(),
                    body,
                })
            }
        }
    }

    async fn upload(&self, upload: MediaUpload, context: &RequestContext) -> ClientResult<Value> {
        debug!(
            endpoint = %self.upload_endpoint,
            file_name = %upload.file_name,
            content_type = %upload.content_type,
            size = upload.bytes.len(),
            "Uploading media"
        );

        let form = upload.into_form()?;
        let builder = self
            .client
            .post(self.upload_endpoint.clone())
            .multipart(form);
        let response = Self::authorize(builder, context).send().await?;

        read_json(response).await
    }
}

async fn read_json(response: Response) -> ClientResult<Value> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }

    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            warn!(status = %status, error = %e, "Failed to read upload error body");
            format!("<unreadable body: {e}>")
        }
    };
    error!(status = %status, body = %body, "Media upload failed");
    Err(ClientError::Status {
        status: status.as_u16(),
        body,
    })
}

fn header_map(headers: &HashMap<String, String>) -> ClientResult<HeaderMap> {
    let mut map = HeaderMap::new();
    for (name, value) in headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| ClientError::Config(format!("invalid header name {name}: {e}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| ClientError::Config(format!("invalid value for header {name}: {e}")))?;
        map.insert(name, value);
    }
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_map() {
        let mut headers = HashMap::new();
        headers.insert("X-Instance".to_string(), "social.example".to_string());

        let map = header_map(&headers).unwrap();
        assert_eq!(map.get("x-instance").unwrap(), "social.example");
    }

    #[test]
    fn test_invalid_header_name() {
        let mut headers = HashMap::new();
        headers.insert("bad header".to_string(), "v".to_string());

        assert!(matches!(header_map(&headers), Err(ClientError::Config(_))));
    }

    #[test]
    fn test_endpoints_from_config() {
        let config = ClientConfig::new("https://social.example/api/graphql");
        let transport = HttpTransport::new(&config).unwrap();

        assert_eq!(transport.endpoint().as_str(), "https://social.example/api/graphql");
        assert_eq!(
            transport.upload_endpoint().as_str(),
            "https://social.example/api/v1/media"
        );
    }
}
