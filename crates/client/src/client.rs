//! The GraphQL adapter.

use fedigraph_common::{ClientError, ClientResult, Config, IdGenerator};
use fedigraph_types::{Connection, Media};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};
use validator::Validate;

use crate::auth::Credentials;
use crate::graphql::{GraphQlRequest, into_variables};
use crate::missing_target::{DeleteOutcome, MissingTargetSignature};
use crate::operation::Operation;
use crate::pagination::PageArgs;
use crate::subscription::{SubscriptionConnector, SubscriptionStream};
use crate::transport::{HttpTransport, RequestContext, Transport};
use crate::upload::MediaUpload;

/// Typed client for the social network's GraphQL API.
///
/// Cloning is cheap; clones share the transport, the bearer token and the
/// closed state.
#[derive(Clone)]
pub struct FediClient {
    transport: Arc<dyn Transport>,
    credentials: Arc<Credentials>,
    connector: SubscriptionConnector,
    missing_target: MissingTargetSignature,
    default_page_size: u32,
    id_gen: IdGenerator,
    shutdown: Arc<watch::Sender<bool>>,
}

impl std::fmt::Debug for FediClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FediClient")
            .field("ws_endpoint", &self.connector.url().as_str())
            .field("authenticated", &self.credentials.token().is_some())
            .field("default_page_size", &self.default_page_size)
            .field("closed", &self.is_closed())
            .finish_non_exhaustive()
    }
}

impl FediClient {
    /// Create a client talking HTTP to the configured endpoint.
    pub fn new(config: &Config) -> ClientResult<Self> {
        let transport = HttpTransport::new(&config.client)?;
        Self::with_transport(Arc::new(transport), config)
    }

    /// Create a client over any transport.
    pub fn with_transport(transport: Arc<dyn Transport>, config: &Config) -> ClientResult<Self> {
        let (shutdown, _) = watch::channel(false);

        Ok(Self {
            transport,
            credentials: Arc::new(Credentials::new(config.client.token.clone())),
            connector: SubscriptionConnector::new(&config.client, &config.subscriptions)?,
            missing_target: MissingTargetSignature::from_config(&config.errors)?,
            default_page_size: config.client.default_page_size,
            id_gen: IdGenerator::new(),
            shutdown: Arc::new(shutdown),
        })
    }

    /// Replace the bearer token used by later requests and subscriptions.
    /// `None` or an empty string removes the `Authorization` header.
    pub fn update_token(&self, token: Option<String>) {
        let authenticated = token.as_deref().is_some_and(|t| !t.trim().is_empty());
        self.credentials.set(token);
        debug!(authenticated, "Bearer token updated");
    }

    /// Current bearer token.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.credentials.token()
    }

    /// Close the client. Open subscriptions send `complete` and end; later
    /// calls fail with [`ClientError::Closed`].
    pub fn close(&self) {
        let was_open = !self.shutdown.send_replace(true);
        if was_open {
            info!("Client closed");
        }
    }

    /// Whether [`close`](Self::close) has been called.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        *self.shutdown.borrow()
    }

    /// Page size used when a paginated call has no explicit size.
    #[must_use]
    pub const fn default_page_size(&self) -> u32 {
        self.default_page_size
    }

    /// Signature used to recognise the missing-target error.
    #[must_use]
    pub const fn missing_target_signature(&self) -> &MissingTargetSignature {
        &self.missing_target
    }

    /// Run a query and read its root field.
    pub async fn query<T: DeserializeOwned>(
        &self,
        operation: &Operation,
        variables: Value,
    ) -> ClientResult<T> {
        self.execute(operation, variables).await
    }

    /// Run a mutation and read its root field.
    pub async fn mutate<T: DeserializeOwned>(
        &self,
        operation: &Operation,
        variables: Value,
    ) -> ClientResult<T> {
        self.execute(operation, variables).await
    }

    /// Run a deletion or undo mutation.
    ///
    /// The missing-target error means the target is already gone and yields
    /// [`DeleteOutcome::AlreadyAbsent`]; every other error is returned.
    pub async fn remove(&self, operation: &Operation, variables: Value) -> ClientResult<DeleteOutcome> {
        match self.execute::<Value>(operation, variables).await {
            Ok(_) => Ok(DeleteOutcome::Removed),
            Err(err) if self.missing_target.matches(&err) => {
                warn!(
                    operation = operation.name,
                    error = %err,
                    "Target already absent, treating removal as done"
                );
                Ok(DeleteOutcome::AlreadyAbsent)
            }
            Err(err) => Err(err),
        }
    }

    /// Run a paginated query. `page` is written into `variables`, with the
    /// default page size when it gives none.
    pub async fn paginate<T: DeserializeOwned>(
        &self,
        operation: &Operation,
        variables: Value,
        page: &PageArgs,
    ) -> ClientResult<Connection<T>> {
        let mut variables = into_variables(variables);
        page.apply(&mut variables, self.default_page_size);
        self.execute(operation, Value::Object(variables)).await
    }

    /// Validate `input`, then run the mutation with it as `$input`.
    pub(crate) async fn mutate_input<I, T>(&self, operation: &Operation, input: &I) -> ClientResult<T>
    where
        I: Validate + serde::Serialize + Sync,
        T: DeserializeOwned,
    {
        input.validate()?;
        let input = serde_json::to_value(input)?;
        self.mutate(operation, serde_json::json!({ "input": input })).await
    }

    /// Upload a media file as `multipart/form-data` and return the created
    /// attachment.
    pub async fn upload_media(&self, upload: MediaUpload) -> ClientResult<Media> {
        self.ensure_open()?;
        upload.check()?;

        let context = self.context();
        let file_name = upload.file_name.clone();
        let value = self.transport.upload(upload, &context).await?;
        let media: Media = serde_json::from_value(value)?;

        info!(media_id = %media.id, file_name = %file_name, "Media uploaded");
        Ok(media)
    }

    /// Open a subscription and stream its root field as `T`.
    ///
    /// Each call opens a fresh connection.
    pub async fn subscribe<T>(
        &self,
        operation: &Operation,
        variables: Value,
    ) -> ClientResult<SubscriptionStream<T>>
    where
        T: DeserializeOwned + Send + 'static,
    {
        self.ensure_open()?;
        let request = GraphQlRequest::new(operation, into_variables(variables));
        self.connector
            .open(
                request,
                operation.root,
                self.credentials.bearer(),
                self.shutdown.subscribe(),
            )
            .await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        operation: &Operation,
        variables: Value,
    ) -> ClientResult<T> {
        self.ensure_open()?;

        let request = GraphQlRequest::new(operation, into_variables(variables));
        let context = self.context();
        let response = self.transport.execute(&request, &context).await?;

        if !response.errors.is_empty() {
            debug!(
                operation = operation.name,
                request_id = %context.request_id,
                errors = response.errors.len(),
                "GraphQL response carried errors"
            );
        }
        response.extract(operation.root)
    }

    fn context(&self) -> RequestContext {
        RequestContext {
            bearer: self.credentials.bearer(),
            request_id: self.id_gen.generate_request_id(),
        }
    }

    fn ensure_open(&self) -> ClientResult<()> {
        if self.is_closed() {
            return Err(ClientError::Closed);
        }
        Ok(())
    }
}
