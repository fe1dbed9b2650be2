//! Assertion helpers for tests.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use super::app::TestResponse;

/// Assert response has expected status code
pub fn assert_status(response: &TestResponse, expected: StatusCode) {
    assert_eq!(
        response.status, expected,
        "Expected status {}, got {}. Body: {}",
        expected,
        response.status,
        response.text()
    );
}

/// Assert response is OK (200)
pub fn assert_ok(response: &TestResponse) {
    assert_status(response, StatusCode::OK);
}

/// Assert a session response carries a complete, well-formed palette
pub fn assert_valid_session_response(response: &TestResponse) -> serde_json::Value {
    assert_ok(response);
    let json: serde_json::Value = response.json();

    assert!(json["id"].is_string(), "Expected id to be a string");
    assert!(json["mode"].is_string(), "Expected mode to be a string");
    assert!(json["created_at"].is_string(), "Expected created_at");

    let colors = json["colors"].as_array().expect("Expected colors array");
    assert_eq!(colors.len(), 5, "Palette should have 5 colors");
    for color in colors {
        assert_hex_color(color.as_str().expect("Color should be a string"));
    }

    let locked = json["locked"].as_array().expect("Expected locked array");
    assert_eq!(locked.len(), 5, "Lock mask should have 5 entries");
    for entry in locked {
        assert!(entry.is_boolean(), "Lock entries should be booleans");
    }

    json
}

/// Assert a string is a well-formed "#RRGGBB" color
pub fn assert_hex_color(value: &str) {
    assert_eq!(value.len(), 7, "Expected #RRGGBB, got {value:?}");
    assert!(value.starts_with('#'), "Expected leading '#' in {value:?}");
    assert!(
        value[1..].chars().all(|c| c.is_ascii_hexdigit()),
        "Expected hex digits in {value:?}"
    );
}

/// Extract the colors array from a session response as strings
pub fn colors_of(json: &serde_json::Value) -> Vec<String> {
    json["colors"]
        .as_array()
        .expect("Expected colors array")
        .iter()
        .map(|c| c.as_str().unwrap().to_string())
        .collect()
}

/// Extract the lock mask from a session response
pub fn locks_of(json: &serde_json::Value) -> Vec<bool> {
    json["locked"]
        .as_array()
        .expect("Expected locked array")
        .iter()
        .map(|l| l.as_bool().unwrap())
        .collect()
}
