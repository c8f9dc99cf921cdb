//! The log tailing session: configuration and dispatch loop
//!
//! A [`Tailer`] binds one [`Config`] to one running pipeline. `run` resolves
//! exactly once: `Ok(())` when the session is cancelled (interrupt or caller
//! cancellation), `Err` when the connection fails unrecoverably. Sessions
//! are not restartable; construct a new one to tail again.

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

use apitail_stream::{
    ConnectionManager, OnMessage, OnTerminate, StreamConfig, StreamError, WebSocketManager,
};

use crate::filters::LogFilters;
use crate::message;
use crate::render::{OutputFormat, Renderer};

/// Configuration of a log tailing session
///
/// Constructed once by the caller and read-only thereafter.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Base API endpoint
    pub api_base: String,

    /// API key used to authenticate the session
    pub api_key: String,

    /// Device identity string sent to help the server identify this client
    pub device_name: String,

    /// Server-side filters for API request logs
    pub filters: LogFilters,

    /// Force unencrypted ws:// instead of wss://
    pub no_wss: bool,

    /// Output format for request logs
    pub format: OutputFormat,

    /// Colorize rendered output (caller decides from TTY state)
    pub color: bool,

    /// Feature tag for the streaming connection
    pub websocket_feature: String,
}

/// The main interface for running a log tailing session
pub struct Tailer {
    cfg: Config,
}

impl Tailer {
    /// Create a new tailer for the given configuration
    pub fn new(cfg: Config) -> Self {
        Self { cfg }
    }

    /// Run the session over the default websocket transport
    ///
    /// Blocks until the first of: interrupt signal, cancellation of
    /// `parent`, or fatal connection error.
    pub async fn run(&self, parent: CancellationToken) -> Result<(), StreamError> {
        let manager = WebSocketManager::new(self.stream_config()?);
        self.run_with(parent, manager).await
    }

    /// Run the session over a caller-supplied transport
    pub async fn run_with<M>(
        &self,
        parent: CancellationToken,
        manager: M,
    ) -> Result<(), StreamError>
    where
        M: ConnectionManager + 'static,
    {
        info!("Getting ready...");

        let (scope, cancel) = crate::signal::with_interrupt_cancel(&parent, || {
            debug!("interrupt received, cleaning up...");
        });

        let renderer = Renderer::new(self.cfg.format).with_color(self.cfg.color);
        let on_message: OnMessage = Box::new(move |raw: &[u8]| {
            for line in render_frame(&renderer, raw) {
                println!("{line}");
            }
        });

        // Capacity 1: the single producer sends at most once and never blocks.
        let (error_tx, mut error_rx) = mpsc::channel::<StreamError>(1);
        let terminate_cancel = cancel.clone();
        let on_terminate: OnTerminate = Box::new(move |err: StreamError| {
            error!(error = %err, "terminating: connection failed");
            // Deliver before cancelling so the error wins the dispatch wait.
            let _ = error_tx.try_send(err);
            terminate_cancel();
        });

        let conn_scope = scope.clone();
        tokio::spawn(async move {
            manager.run(conn_scope, on_message, on_terminate).await;
        });

        tokio::select! {
            biased;
            Some(err) = error_rx.recv() => Err(err),
            _ = scope.cancelled() => Ok(()),
        }
    }

    fn stream_config(&self) -> Result<StreamConfig, StreamError> {
        let filters_json = if self.cfg.filters == LogFilters::default() {
            String::new()
        } else {
            self.cfg.filters.to_json()?
        };

        Ok(StreamConfig {
            api_base: self.cfg.api_base.clone(),
            api_key: self.cfg.api_key.clone(),
            device_name: self.cfg.device_name.clone(),
            websocket_feature: self.cfg.websocket_feature.clone(),
            filters_json,
            no_wss: self.cfg.no_wss,
            ..StreamConfig::default()
        })
    }
}

/// Run one inbound frame through decode → filter → render
///
/// Returns the output lines for the frame; empty for anything dropped
/// (non-request-log variants, malformed input, heartbeat traffic).
fn render_frame(renderer: &Renderer, raw: &[u8]) -> Vec<String> {
    let msg = message::decode_message(raw);

    let Some(event) = msg.request_log_event else {
        debug!("received non-request-log event");
        return Vec::new();
    };

    debug!(request_log_id = %event.request_log_id, "processing request log event");

    let Some(payload) = message::decode_payload(&event.event_payload) else {
        return Vec::new();
    };

    if !message::accept(&payload) {
        return Vec::new();
    }

    renderer.render_lines(&payload, &event.event_payload)
}

#[cfg(test)]
#[path = "tailer_test.rs"]
mod tests;
