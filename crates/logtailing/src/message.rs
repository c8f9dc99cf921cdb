//! Tolerant decoding and domain filtering of inbound frames
//!
//! Decode failures never stop the stream: a malformed envelope yields the
//! zero-value envelope (never partially populated fields), a malformed inner
//! payload abandons that one event, and the loop moves on to the next frame.

use tracing::debug;

use apitail_stream::IncomingMessage;

use crate::payload::EventPayload;

/// The tool's own session keep-alive path, filtered from display
pub const HEARTBEAT_PATH: &str = "/v1/stripecli/sessions";

/// Decode the outer message envelope, tolerating malformed input
pub fn decode_message(raw: &[u8]) -> IncomingMessage {
    match serde_json::from_slice(raw) {
        Ok(msg) => msg,
        Err(e) => {
            debug!(error = %e, "received malformed message");
            IncomingMessage::default()
        }
    }
}

/// Decode a request-log event payload, tolerating malformed input
///
/// Returns `None` when the payload cannot be decoded; the event is
/// abandoned and the stream continues.
pub fn decode_payload(raw: &str) -> Option<EventPayload> {
    match serde_json::from_str(raw) {
        Ok(payload) => Some(payload),
        Err(e) => {
            debug!(error = %e, "received malformed payload");
            None
        }
    }
}

/// Whether a payload should be shown
///
/// The only exclusion is the tool's own control-plane traffic: session
/// heartbeats are generated by the CLI and would otherwise show up in every
/// tail. This check is closed; user-facing filters are applied server-side.
pub fn accept(payload: &EventPayload) -> bool {
    if payload.url == HEARTBEAT_PATH {
        debug!(url = %payload.url, "filtering session heartbeat from logs");
        return false;
    }
    true
}

#[cfg(test)]
#[path = "message_test.rs"]
mod tests;
