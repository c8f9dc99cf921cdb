//! Apitail stream - duplex transport for live request-log delivery
//!
//! This crate provides the connection side of the tailing pipeline:
//!
//! - The inbound message envelope ([`IncomingMessage`]) and its request-log
//!   variant ([`RequestLogEvent`])
//! - The [`ConnectionManager`] contract consumed by the dispatch loop:
//!   serial, non-overlapping `on_message` calls and at most one
//!   `on_terminate` call per connection
//! - A websocket implementation of that contract ([`WebSocketManager`])
//!
//! The consumer owns decode, filtering, and rendering; this crate only moves
//! raw frames and reports the single fatal error that ends a session.

pub mod error;
pub mod manager;
pub mod message;
pub mod websocket;

pub use error::StreamError;
pub use manager::{ConnectionManager, OnMessage, OnTerminate, StreamConfig};
pub use message::{IncomingMessage, RequestLogEvent};
pub use websocket::WebSocketManager;
