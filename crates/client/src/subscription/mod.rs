//! GraphQL subscriptions over `graphql-transport-ws`.
//!
//! Every subscription gets its own socket and its own task. The task owns
//! the socket, answers pings, and forwards decoded payloads to the
//! [`SubscriptionStream`] over a bounded channel.

mod protocol;
mod stream;

pub use protocol::{ClientMessage, SUBPROTOCOL, ServerMessage};
pub use stream::SubscriptionStream;

use fedigraph_common::{ClientConfig, ClientError, ClientResult, IdGenerator, SubscriptionConfig};
use futures::{SinkExt, StreamExt};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::sync::{mpsc, oneshot, watch};
use tokio_stream::wrappers::ReceiverStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::tungstenite::client::IntoClientRequest;
use tokio_tungstenite::tungstenite::http::header::{HeaderName, HeaderValue, SEC_WEBSOCKET_PROTOCOL};
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};
use tracing::{debug, info, warn};
use url::Url;

use crate::graphql::GraphQlRequest;

type Socket = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Opens subscription sockets.
#[derive(Debug, Clone)]
pub struct SubscriptionConnector {
    url: Url,
    headers: HashMap<String, String>,
    ack_timeout: Duration,
    capacity: usize,
    id_gen: IdGenerator,
}

impl SubscriptionConnector {
    /// Connector for the configured WebSocket endpoint.
    pub fn new(client: &ClientConfig, subscriptions: &SubscriptionConfig) -> ClientResult<Self> {
        Ok(Self {
            url: client.ws_url()?,
            headers: client.headers.clone(),
            ack_timeout: Duration::from_secs(subscriptions.ack_timeout_secs),
            capacity: subscriptions.channel_capacity.max(1),
            id_gen: IdGenerator::new(),
        })
    }

    /// WebSocket endpoint.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    /// Connect, complete the handshake, send `subscribe`, then hand the
    /// socket to a background task.
    ///
    /// Connection, handshake and send failures are returned here; once this
    /// returns, failures arrive as stream items.
    pub async fn open<T>(
        &self,
        request: GraphQlRequest,
        root: &'static str,
        bearer: Option<String>,
        shutdown: watch::Receiver<bool>,
    ) -> ClientResult<SubscriptionStream<T>>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let id = self.id_gen.generate();
        let operation = request.operation_name;

        let mut socket = self.connect().await?;
        self.handshake(&mut socket, bearer.as_deref()).await?;

        let subscribe = ClientMessage::Subscribe {
            id: &id,
            payload: &request,
        };
        send_frame(&mut socket, &subscribe).await?;

        let (tx, rx) = mpsc::channel(self.capacity);
        let (stop_tx, stop_rx) = oneshot::channel();

        info!(
            subscription_id = %id,
            operation = operation,
            endpoint = %self.url,
            "Subscription started"
        );

        tokio::spawn(pump(
            socket,
            id.clone(),
            operation,
            root,
            tx,
            stop_rx,
            shutdown,
        ));

        Ok(SubscriptionStream::new(
            id,
            operation,
            ReceiverStream::new(rx),
            stop_tx,
        ))
    }

    async fn connect(&self) -> ClientResult<Socket> {
        let mut request = self.url.as_str().into_client_request()?;
        let headers = request.headers_mut();
        headers.insert(SEC_WEBSOCKET_PROTOCOL, HeaderValue::from_static(SUBPROTOCOL));
        for (name, value) in &self.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| ClientError::Config(format!("invalid header name {name}: {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| ClientError::Config(format!("invalid value for header {name}: {e}")))?;
            headers.insert(name, value);
        }

        debug!(endpoint = %self.url, "Connecting subscription socket");
        let (socket, _response) = connect_async(request).await?;
        Ok(socket)
    }

    async fn handshake(&self, socket: &mut Socket, bearer: Option<&str>) -> ClientResult<()> {
        send_frame(socket, &ClientMessage::init(bearer)).await?;

        tokio::time::timeout(self.ack_timeout, wait_for_ack(socket))
            .await
            .map_err(|_| ClientError::Timeout("connection_ack".to_string()))?
    }
}

async fn wait_for_ack(socket: &mut Socket) -> ClientResult<()> {
    while let Some(frame) = socket.next().await {
        match frame? {
            Message::Text(text) => match serde_json::from_str::<ServerMessage>(&text) {
                Ok(ServerMessage::ConnectionAck { .. }) => return Ok(()),
                Ok(ServerMessage::Ping { .. }) => send_frame(socket, &ClientMessage::Pong).await?,
                Ok(other) => {
                    return Err(ClientError::Protocol(format!(
                        "expected connection_ack, got {other:?}"
                    )));
                }
                Err(e) => {
                    return Err(ClientError::Protocol(format!(
                        "unparsable frame before connection_ack: {e}"
                    )));
                }
            },
            Message::Ping(data) => socket.send(Message::Pong(data)).await?,
            Message::Close(frame) => {
                return Err(ClientError::Protocol(format!(
                    "socket closed before connection_ack: {frame:?}"
                )));
            }
            _ => {}
        }
    }
    Err(ClientError::Protocol(
        "socket ended before connection_ack".to_string(),
    ))
}

async fn send_frame(socket: &mut Socket, message: &ClientMessage<'_>) -> ClientResult<()> {
    socket.send(Message::Text(message.to_text()?)).await?;
    Ok(())
}

/// Resolves once the client is closed. Never resolves if the client is
/// dropped without closing.
async fn closed(mut shutdown: watch::Receiver<bool>) {
    loop {
        if *shutdown.borrow_and_update() {
            return;
        }
        if shutdown.changed().await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}

async fn pump<T>(
    mut socket: Socket,
    id: String,
    operation: &'static str,
    root: &'static str,
    tx: mpsc::Sender<ClientResult<T>>,
    mut stop: oneshot::Receiver<()>,
    shutdown: watch::Receiver<bool>,
) where
    T: DeserializeOwned + Send + 'static,
{
    let closed = closed(shutdown);
    tokio::pin!(closed);

    let send_complete = loop {
        tokio::select! {
            _ = &mut stop => {
                info!(subscription_id = %id, operation = operation, "Subscription stopped");
                break true;
            }
            () = &mut closed => {
                info!(subscription_id = %id, operation = operation, "Client closed, ending subscription");
                break true;
            }
            frame = socket.next() => match frame {
                Some(Ok(Message::Text(text))) => match serde_json::from_str::<ServerMessage>(&text) {
                    Ok(ServerMessage::Next { id: frame_id, payload }) if frame_id == id => {
                        // A full channel must not hide stop or close.
                        tokio::select! {
                            sent = tx.send(payload.extract::<T>(root)) => {
                                if sent.is_err() {
                                    break true;
                                }
                            }
                            _ = &mut stop => break true,
                            () = &mut closed => break true,
                        }
                    }
                    Ok(ServerMessage::Error { id: frame_id, payload }) if frame_id == id => {
                        warn!(subscription_id = %id, operation = operation, "Subscription rejected by server");
                        let _ = tx.send(Err(ClientError::GraphQl(payload))).await;
                        break false;
                    }
                    Ok(ServerMessage::Complete { id: frame_id }) if frame_id == id => {
                        info!(subscription_id = %id, operation = operation, "Subscription completed by server");
                        break false;
                    }
                    Ok(ServerMessage::Ping { .. }) => {
                        if let Err(e) = send_frame(&mut socket, &ClientMessage::Pong).await {
                            let _ = tx.send(Err(e)).await;
                            break false;
                        }
                    }
                    Ok(other) => debug!(subscription_id = %id, frame = ?other, "Ignoring frame"),
                    Err(e) => warn!(subscription_id = %id, error = %e, raw = %text, "Failed to parse subscription frame"),
                },
                Some(Ok(Message::Ping(data))) => {
                    if let Err(e) = socket.send(Message::Pong(data)).await {
                        let _ = tx.send(Err(e.into())).await;
                        break false;
                    }
                }
                Some(Ok(Message::Close(frame))) => {
                    info!(subscription_id = %id, frame = ?frame, "Subscription socket closed by server");
                    break false;
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    warn!(subscription_id = %id, error = %e, "Subscription socket error");
                    let _ = tx.send(Err(e.into())).await;
                    break false;
                }
                None => break false,
            },
        }
    };

    if send_complete {
        let _ = send_frame(&mut socket, &ClientMessage::Complete { id: &id }).await;
    }
    let _ = socket.close(None).await;
    debug!(subscription_id = %id, "Subscription socket released");
}
