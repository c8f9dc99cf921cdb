//! Inbound message envelope
//!
//! The server multiplexes several event kinds over one connection; the
//! envelope tags each frame with a `type` and carries the variant-specific
//! body alongside it. Tailing only consumes the request-log variant, so the
//! envelope keeps unknown variants as an opaque type tag.

use serde::Deserialize;

/// Outer tagged envelope received from the transport
///
/// All fields default so a frame that carries an unrecognized variant still
/// decodes to a usable (empty) envelope.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct IncomingMessage {
    /// Variant discriminator sent by the server
    #[serde(rename = "type", default)]
    pub event_type: Option<String>,

    /// Present iff this frame is a request-log event
    #[serde(default)]
    pub request_log_event: Option<RequestLogEvent>,
}

/// One API request's log event, as carried by the envelope
///
/// The payload is the server's raw JSON string; its schema belongs to the
/// server and is decoded by the consumer.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RequestLogEvent {
    /// Opaque identifier for this log event
    #[serde(default)]
    pub request_log_id: String,

    /// Raw JSON-encoded event payload, verbatim from the wire
    #[serde(default)]
    pub event_payload: String,
}

#[cfg(test)]
#[path = "message_test.rs"]
mod tests;
