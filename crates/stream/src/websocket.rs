//! Websocket implementation of the connection manager contract
//!
//! Maintains one duplex connection: frames in, ping/pong liveness out. All
//! inbound frames are handed to `on_message` from a single task, which gives
//! the serial-delivery guarantee the contract requires for free.

use futures_util::{SinkExt, StreamExt};
use tokio::time::{interval, timeout, Instant};
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::client::IntoClientRequest;
use tokio_tungstenite::tungstenite::http::header::{AUTHORIZATION, USER_AGENT};
use tokio_tungstenite::tungstenite::http::HeaderValue;
use tokio_tungstenite::tungstenite::Message;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use url::Url;

use async_trait::async_trait;

use crate::error::{Result, StreamError};
use crate::manager::{ConnectionManager, OnMessage, OnTerminate, StreamConfig};

/// Websocket-backed connection manager
pub struct WebSocketManager {
    cfg: StreamConfig,
}

impl WebSocketManager {
    /// Create a manager for the given configuration
    pub fn new(cfg: StreamConfig) -> Self {
        Self { cfg }
    }

    /// Build the websocket endpoint URL from the configured API base
    ///
    /// Rewrites the scheme to `wss://` (or `ws://` with `no_wss`) and
    /// attaches the device identity, feature tag, and encoded filters as
    /// query parameters.
    pub fn endpoint(&self) -> Result<String> {
        let mut url = Url::parse(&self.cfg.api_base)
            .map_err(|e| StreamError::InvalidEndpoint(format!("{}: {e}", self.cfg.api_base)))?;

        let scheme = if self.cfg.no_wss { "ws" } else { "wss" };
        url.set_scheme(scheme)
            .map_err(|_| StreamError::InvalidEndpoint(format!("cannot use {scheme} scheme")))?;

        {
            let mut query = url.query_pairs_mut();
            query.append_pair("device_name", &self.cfg.device_name);
            query.append_pair("websocket_feature", &self.cfg.websocket_feature);
            if !self.cfg.filters_json.is_empty() {
                query.append_pair("filters", &self.cfg.filters_json);
            }
        }

        Ok(url.into())
    }

    async fn drive(&self, scope: CancellationToken, on_message: &mut OnMessage) -> Result<()> {
        let mut request = self.endpoint()?.into_client_request()?;

        let auth = HeaderValue::from_str(&format!("Bearer {}", self.cfg.api_key))
            .map_err(|e| StreamError::Connection(format!("invalid API key header: {e}")))?;
        request.headers_mut().insert(AUTHORIZATION, auth);

        if let Ok(agent) = HeaderValue::from_str(&self.cfg.device_name) {
            request.headers_mut().insert(USER_AGENT, agent);
        }

        let (ws, _response) = connect_async(request).await?;
        debug!("websocket connected");

        let (mut write, mut read) = ws.split();

        let mut ping = interval(self.cfg.write_wait);
        ping.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        let mut last_pong = Instant::now();

        loop {
            tokio::select! {
                _ = scope.cancelled() => {
                    // Best-effort close; the session is over either way.
                    let _ = timeout(self.cfg.write_wait, write.send(Message::Close(None))).await;
                    return Ok(());
                }
                _ = ping.tick() => {
                    if last_pong.elapsed() > self.cfg.pong_wait {
                        return Err(StreamError::PongTimeout(self.cfg.pong_wait));
                    }
                    timeout(self.cfg.write_wait, write.send(Message::Ping(Vec::new())))
                        .await
                        .map_err(|_| StreamError::WriteTimeout(self.cfg.write_wait))??;
                }
                frame = read.next() => match frame {
                    Some(Ok(Message::Text(text))) => on_message(text.as_bytes()),
                    Some(Ok(Message::Binary(data))) => on_message(&data),
                    Some(Ok(Message::Pong(_))) => last_pong = Instant::now(),
                    Some(Ok(Message::Ping(data))) => {
                        timeout(self.cfg.write_wait, write.send(Message::Pong(data)))
                            .await
                            .map_err(|_| StreamError::WriteTimeout(self.cfg.write_wait))??;
                    }
                    Some(Ok(Message::Close(_))) | None => {
                        return Err(StreamError::Connection(
                            "server closed the connection".into(),
                        ));
                    }
                    Some(Ok(Message::Frame(_))) => {}
                    Some(Err(e)) => return Err(e.into()),
                },
            }
        }
    }
}

#[async_trait]
impl ConnectionManager for WebSocketManager {
    async fn run(
        &self,
        scope: CancellationToken,
        mut on_message: OnMessage,
        on_terminate: OnTerminate,
    ) {
        match self.drive(scope, &mut on_message).await {
            Ok(()) => debug!("websocket session cancelled"),
            Err(e) => on_terminate(e),
        }
    }
}

#[cfg(test)]
#[path = "websocket_test.rs"]
mod tests;
