//! Typed subscription stream handle.

use fedigraph_common::ClientResult;
use futures::Stream;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::oneshot;
use tokio_stream::wrappers::ReceiverStream;

/// Items of one subscription.
///
/// Dropping the stream, or calling [`unsubscribe`](Self::unsubscribe), sends
/// `complete` for its operation and closes its socket. Other subscriptions
/// are unaffected. The stream ends after the server completes the
/// operation, after an `error` frame, or when the client is closed.
#[derive(Debug)]
pub struct SubscriptionStream<T> {
    id: String,
    operation: &'static str,
    inner: ReceiverStream<ClientResult<T>>,
    stop: Option<oneshot::Sender<()>>,
}

impl<T> SubscriptionStream<T> {
    pub(crate) fn new(
        id: String,
        operation: &'static str,
        inner: ReceiverStream<ClientResult<T>>,
        stop: oneshot::Sender<()>,
    ) -> Self {
        Self {
            id,
            operation,
            inner,
            stop: Some(stop),
        }
    }

    /// Operation id used on the wire.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Name of the subscribed operation.
    #[must_use]
    pub const fn operation(&self) -> &'static str {
        self.operation
    }

    /// Stop this subscription.
    pub fn unsubscribe(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        if let Some(stop) = self.stop.take() {
            // The task is gone when the stream already ended.
            let _ = stop.send(());
        }
    }
}

impl<T> Stream for SubscriptionStream<T> {
    type Item = ClientResult<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.get_mut().inner).poll_next(cx)
    }
}

impl<T> Drop for SubscriptionStream<T> {
    fn drop(&mut self) {
        self.stop();
    }
}
