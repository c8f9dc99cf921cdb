//! Apitail logtailing - the live request-log pipeline
//!
//! Turns raw frames from a streaming connection into console output:
//!
//! ```text
//! ConnectionManager
//!     │ on_message(&[u8])          serial, one frame at a time
//!     ▼
//! decode envelope ──▶ decode payload ──▶ accept? ──▶ render
//!     │ malformed: debug-log, drop frame, keep streaming
//!     ▼
//! stdout (one summary line + error detail lines, or wire-exact JSON)
//! ```
//!
//! The [`Tailer`] owns the session lifecycle: it links an interrupt signal to
//! a cancellation scope, runs the connection, and resolves exactly once —
//! `Ok(())` on cancellation or `Err` on the single fatal connection error.

pub mod filters;
pub mod message;
pub mod payload;
pub mod render;
pub mod signal;
pub mod tailer;

pub use filters::LogFilters;
pub use payload::{EventPayload, RedactedError};
pub use render::{OutputFormat, Renderer};
pub use tailer::{Config, Tailer};
