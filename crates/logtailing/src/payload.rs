//! Decoded view of a request-log event payload
//!
//! The payload schema is defined by the server; decode here is structural
//! only. Every field defaults so older or partial payloads still decode.

use serde::Deserialize;

/// Field mapping for a request-log event payload
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EventPayload {
    /// Creation time, epoch seconds
    #[serde(default)]
    pub created_at: i64,

    /// Live traffic (true) vs sandbox traffic (false)
    #[serde(default)]
    pub livemode: bool,

    /// HTTP method of the request
    #[serde(default)]
    pub method: String,

    /// Request identifier, used for the dashboard deep link
    #[serde(default)]
    pub request_id: String,

    /// HTTP status code
    #[serde(default)]
    pub status: u16,

    /// Request URL; may be empty when the path is not disclosed
    #[serde(default)]
    pub url: String,

    /// Redacted error details, if the request failed
    #[serde(default)]
    pub error: RedactedError,
}

/// Redacted error fields embedded in an event payload
///
/// An empty string means the field is absent and is not rendered.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RedactedError {
    #[serde(rename = "type", default)]
    pub error_type: String,

    #[serde(default)]
    pub charge: String,

    #[serde(default)]
    pub code: String,

    #[serde(default)]
    pub decline_code: String,

    #[serde(default)]
    pub message: String,

    #[serde(default)]
    pub param: String,
}

impl RedactedError {
    /// The (label, value) pairs in fixed declaration order
    ///
    /// Replaces field reflection: rendering walks this list and prints only
    /// the non-empty entries, preserving exact output order.
    pub fn fields(&self) -> [(&'static str, &str); 6] {
        [
            ("Type", self.error_type.as_str()),
            ("Charge", self.charge.as_str()),
            ("Code", self.code.as_str()),
            ("DeclineCode", self.decline_code.as_str()),
            ("Message", self.message.as_str()),
            ("Param", self.param.as_str()),
        ]
    }
}

#[cfg(test)]
#[path = "payload_test.rs"]
mod tests;
