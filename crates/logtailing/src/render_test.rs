//! Tests for rendering

use super::*;
use crate::payload::RedactedError;

fn sample_payload() -> EventPayload {
    EventPayload {
        created_at: 1700000000,
        livemode: true,
        method: "GET".to_string(),
        request_id: "req_123".to_string(),
        status: 200,
        url: "/v1/charges".to_string(),
        error: RedactedError::default(),
    }
}

fn expected_local_time(epoch: i64) -> String {
    use chrono::{Local, TimeZone};
    Local
        .timestamp_opt(epoch, 0)
        .single()
        .unwrap()
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

/// Drop CSI sequences (`ESC [ ... m`), keeping every other character
fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            for esc in chars.by_ref() {
                if esc == 'm' {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

// ============================================================================
// Format parsing
// ============================================================================

#[test]
fn test_format_from_str() {
    assert_eq!(OutputFormat::from_str("json"), OutputFormat::Json);
    assert_eq!(OutputFormat::from_str("JSON"), OutputFormat::Json);
    assert_eq!(OutputFormat::from_str("j"), OutputFormat::Json);
    assert_eq!(OutputFormat::from_str("human"), OutputFormat::Human);
    assert_eq!(OutputFormat::from_str(""), OutputFormat::Human);
}

// ============================================================================
// JSON format
// ============================================================================

#[test]
fn test_json_without_color_is_verbatim() {
    let raw = "{\n  \"status\": 200,\t\"url\":\"/v1/charges\" }";
    let renderer = Renderer::new(OutputFormat::Json).with_color(false);

    let lines = renderer.render_lines(&sample_payload(), raw);
    assert_eq!(lines, vec![raw.to_string()]);
}

#[test]
fn test_json_colorized_preserves_content() {
    let raw = r#"{"status":200,"livemode":true,"error":null,"amount":-12.5e3,"url":"/v1/charges"}"#;
    let renderer = Renderer::new(OutputFormat::Json).with_color(true);

    let lines = renderer.render_lines(&sample_payload(), raw);
    assert_eq!(lines.len(), 1);
    assert_eq!(strip_ansi(&lines[0]), raw);
}

#[test]
fn test_colorize_json_tolerates_invalid_json() {
    let raw = r#"{"truncated": "#;
    assert_eq!(strip_ansi(&colorize_json(raw, true)), raw);
}

#[test]
fn test_colorize_json_handles_escaped_quotes() {
    let raw = r#"{"message":"she said \"no\""}"#;
    assert_eq!(strip_ansi(&colorize_json(raw, true)), raw);
}

// ============================================================================
// Human format
// ============================================================================

#[test]
fn test_human_summary_line() {
    let renderer = Renderer::new(OutputFormat::Human).with_color(false);
    let lines = renderer.render_lines(&sample_payload(), "{}");

    assert_eq!(lines.len(), 1);
    let expected = format!(
        "{} [200] GET /v1/charges [req_123]",
        expected_local_time(1700000000)
    );
    assert_eq!(lines[0], expected);
}

#[test]
fn test_human_livemode_link_has_no_test_segment() {
    let payload = sample_payload();
    assert_eq!(
        dashboard_url(&payload),
        "https://dashboard.stripe.com/logs/req_123"
    );

    let renderer = Renderer::new(OutputFormat::Human).with_color(true);
    let lines = renderer.render_lines(&payload, "{}");
    assert!(lines[0].contains("/logs/req_123"));
    assert!(!lines[0].contains("/test/logs/"));
}

#[test]
fn test_human_testmode_link_has_test_segment() {
    let payload = EventPayload {
        livemode: false,
        ..sample_payload()
    };
    assert_eq!(
        dashboard_url(&payload),
        "https://dashboard.stripe.com/test/logs/req_123"
    );

    let renderer = Renderer::new(OutputFormat::Human).with_color(true);
    let lines = renderer.render_lines(&payload, "{}");
    assert!(lines[0].contains("/test/logs/req_123"));
}

#[test]
fn test_human_empty_url_uses_placeholder() {
    let payload = EventPayload {
        url: String::new(),
        ..sample_payload()
    };

    let renderer = Renderer::new(OutputFormat::Human).with_color(false);
    let lines = renderer.render_lines(&payload, "{}");
    assert!(lines[0].contains("[View path in dashboard]"));
}

#[test]
fn test_human_single_error_field() {
    let payload = EventPayload {
        status: 402,
        error: RedactedError {
            code: "card_declined".to_string(),
            ..RedactedError::default()
        },
        ..sample_payload()
    };

    let renderer = Renderer::new(OutputFormat::Human).with_color(false);
    let lines = renderer.render_lines(&payload, "{}");
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1], "Code: card_declined");
}

#[test]
fn test_human_error_fields_in_order() {
    let payload = EventPayload {
        error: RedactedError {
            error_type: "card_error".to_string(),
            message: "Your card was declined.".to_string(),
            param: "card".to_string(),
            ..RedactedError::default()
        },
        ..sample_payload()
    };

    let renderer = Renderer::new(OutputFormat::Human).with_color(false);
    let lines = renderer.render_lines(&payload, "{}");
    assert_eq!(
        &lines[1..],
        &[
            "Type: card_error".to_string(),
            "Message: Your card was declined.".to_string(),
            "Param: card".to_string(),
        ]
    );
}

#[test]
fn test_human_status_colorized_by_class() {
    let renderer = Renderer::new(OutputFormat::Human).with_color(true);

    let ok = renderer.render_lines(&sample_payload(), "{}");
    assert!(ok[0].contains("\x1b[32m")); // green for 2xx

    let failed = EventPayload {
        status: 500,
        ..sample_payload()
    };
    let failed_lines = renderer.render_lines(&failed, "{}");
    assert!(failed_lines[0].contains("\x1b[31m")); // red for 5xx
}
