//! Connection manager contract
//!
//! The dispatch loop does not own the transport; it hands the manager two
//! callbacks and waits on its cancellation scope. Implementations must:
//!
//! - invoke `on_message` serially, one frame at a time, never concurrently
//!   (the consumer's multi-line render is not atomic across frames)
//! - invoke `on_terminate` at most once, only for an unrecoverable failure
//! - stop delivering frames once the scope is cancelled

use std::time::Duration;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::error::StreamError;

/// Handler for every inbound raw frame
pub type OnMessage = Box<dyn FnMut(&[u8]) + Send>;

/// Handler for the single fatal connection error
pub type OnTerminate = Box<dyn FnOnce(StreamError) + Send>;

/// Default write deadline for outbound control frames
pub const DEFAULT_WRITE_WAIT: Duration = Duration::from_secs(5);

/// Default window in which a pong must arrive
pub const DEFAULT_PONG_WAIT: Duration = Duration::from_secs(10);

/// Configuration for a streaming connection
#[derive(Debug, Clone)]
pub struct StreamConfig {
    /// Base API endpoint; the scheme is rewritten for the websocket dialect
    pub api_base: String,

    /// API key used to authenticate the connection
    pub api_key: String,

    /// Device identity string sent to help the server identify this client
    pub device_name: String,

    /// Feature tag selecting what the connection subscribes to
    pub websocket_feature: String,

    /// Pre-encoded filter criteria applied server-side (empty = none)
    pub filters_json: String,

    /// Force unencrypted ws:// instead of wss://
    pub no_wss: bool,

    /// Deadline for outbound writes
    pub write_wait: Duration,

    /// Liveness window: a missing pong past this is a fatal error
    pub pong_wait: Duration,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            api_key: String::new(),
            device_name: String::new(),
            websocket_feature: String::new(),
            filters_json: String::new(),
            no_wss: false,
            write_wait: DEFAULT_WRITE_WAIT,
            pong_wait: DEFAULT_PONG_WAIT,
        }
    }
}

/// A transport that delivers inbound frames until cancelled or broken
#[async_trait]
pub trait ConnectionManager: Send + Sync {
    /// Establish and maintain the connection, delivering frames to
    /// `on_message` until `scope` is cancelled or a fatal error occurs.
    ///
    /// A fatal error is reported through `on_terminate` exactly once;
    /// cancellation returns without invoking it.
    async fn run(&self, scope: CancellationToken, on_message: OnMessage, on_terminate: OnTerminate);
}
