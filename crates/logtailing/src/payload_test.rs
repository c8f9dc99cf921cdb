//! Tests for payload decoding

use super::*;

#[test]
fn test_decode_full_payload() {
    let raw = r#"{
        "created_at": 1700000000,
        "livemode": true,
        "method": "GET",
        "request_id": "req_123",
        "status": 200,
        "url": "/v1/charges"
    }"#;

    let payload: EventPayload = serde_json::from_str(raw).unwrap();
    assert_eq!(payload.created_at, 1700000000);
    assert!(payload.livemode);
    assert_eq!(payload.method, "GET");
    assert_eq!(payload.request_id, "req_123");
    assert_eq!(payload.status, 200);
    assert_eq!(payload.url, "/v1/charges");
    assert_eq!(payload.error, RedactedError::default());
}

#[test]
fn test_decode_defaults_missing_fields() {
    let payload: EventPayload = serde_json::from_str("{}").unwrap();
    assert_eq!(payload, EventPayload::default());
}

#[test]
fn test_decode_embedded_error() {
    let raw = r#"{
        "status": 402,
        "error": {
            "type": "card_error",
            "code": "card_declined",
            "decline_code": "insufficient_funds"
        }
    }"#;

    let payload: EventPayload = serde_json::from_str(raw).unwrap();
    assert_eq!(payload.error.error_type, "card_error");
    assert_eq!(payload.error.code, "card_declined");
    assert_eq!(payload.error.decline_code, "insufficient_funds");
    assert_eq!(payload.error.message, "");
}

#[test]
fn test_error_fields_declaration_order() {
    let error = RedactedError {
        error_type: "card_error".to_string(),
        charge: "ch_1".to_string(),
        code: "card_declined".to_string(),
        decline_code: "do_not_honor".to_string(),
        message: "Your card was declined.".to_string(),
        param: "card".to_string(),
    };

    let labels: Vec<&str> = error.fields().iter().map(|(label, _)| *label).collect();
    assert_eq!(
        labels,
        vec!["Type", "Charge", "Code", "DeclineCode", "Message", "Param"]
    );
}

#[test]
fn test_error_fields_values_align_with_labels() {
    let error = RedactedError {
        code: "card_declined".to_string(),
        ..RedactedError::default()
    };

    let non_empty: Vec<(&str, &str)> = error
        .fields()
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .collect();
    assert_eq!(non_empty, vec![("Code", "card_declined")]);
}
