//! Error types for the stream crate

use std::io;
use std::time::Duration;

use thiserror::Error;

/// Errors that can occur while running a streaming connection
#[derive(Error, Debug)]
pub enum StreamError {
    /// I/O error (socket operations)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Websocket-level failure (handshake, protocol, transport)
    #[error("websocket error: {0}")]
    WebSocket(#[from] tokio_tungstenite::tungstenite::Error),

    /// Connection ended or refused in a way the session cannot recover from
    #[error("connection error: {0}")]
    Connection(String),

    /// The endpoint URL could not be built from the configuration
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Filter criteria could not be encoded for the server
    #[error("filter encoding error: {0}")]
    Encode(#[from] serde_json::Error),

    /// No pong received within the liveness window
    #[error("no pong received within {0:?}")]
    PongTimeout(Duration),

    /// A write did not complete within the write deadline
    #[error("write did not complete within {0:?}")]
    WriteTimeout(Duration),
}

/// Result type for stream operations
pub type Result<T> = std::result::Result<T, StreamError>;
