//! User-provided filters for request-log tailing
//!
//! Filters are applied server-side: they are encoded once and sent with the
//! connection handshake. Declaration order here is the canonical key order
//! of the encoded form.

use serde::Serialize;

/// All of the potential user-provided filter dimensions
///
/// Every dimension is an independent list of values; an empty list imposes
/// no restriction and is omitted from the encoded form.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LogFilters {
    #[serde(rename = "filter_account", skip_serializing_if = "Vec::is_empty")]
    pub account: Vec<String>,

    #[serde(rename = "filter_ip_address", skip_serializing_if = "Vec::is_empty")]
    pub ip_address: Vec<String>,

    #[serde(rename = "filter_http_method", skip_serializing_if = "Vec::is_empty")]
    pub http_method: Vec<String>,

    #[serde(rename = "filter_request_path", skip_serializing_if = "Vec::is_empty")]
    pub request_path: Vec<String>,

    #[serde(rename = "filter_request_status", skip_serializing_if = "Vec::is_empty")]
    pub request_status: Vec<String>,

    #[serde(rename = "filter_source", skip_serializing_if = "Vec::is_empty")]
    pub source: Vec<String>,

    #[serde(rename = "filter_status_code", skip_serializing_if = "Vec::is_empty")]
    pub status_code: Vec<String>,

    #[serde(
        rename = "filter_status_code_type",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub status_code_type: Vec<String>,
}

impl LogFilters {
    /// Encode the filters as their canonical JSON object
    ///
    /// Empty dimensions are omitted; an encoding failure is a programmer
    /// error, not a runtime condition to recover from.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
#[path = "filters_test.rs"]
mod tests;
