//! Error body normalization
//!
//! The API reports failures in several shapes. Every shape is flattened into
//! one display string, in this order of precedence:
//!
//! 1. an `errors` list or map, joined with `", "`
//! 2. an `error`, `message` or `detail` field
//! 3. the raw body
//! 4. the status reason phrase, then a generic message

use serde_json::Value;

pub const NO_RESPONSE_MESSAGE: &str = "No response from server.";
pub const GENERIC_MESSAGE: &str = "API request failed.";

const MESSAGE_FIELDS: [&str; 3] = ["error", "message", "detail"];

/// Turn an error response body into a single message.
pub fn normalize_error_body(status: u16, body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return reqwest::StatusCode::from_u16(status)
            .ok()
            .and_then(|status| status.canonical_reason())
            .unwrap_or(GENERIC_MESSAGE)
            .to_string();
    }

    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Object(fields)) => {
            if let Some(errors) = fields.get("errors").filter(|v| is_truthy(v)) {
                return join_errors(errors);
            }
            MESSAGE_FIELDS
                .iter()
                .filter_map(|key| fields.get(*key))
                .find_map(present)
                .unwrap_or_else(|| Value::Object(fields.clone()).to_string())
        }
        Ok(Value::String(text)) => text,
        _ => trimmed.to_string(),
    }
}

fn join_errors(errors: &Value) -> String {
    let mut parts = Vec::new();
    flatten(errors, &mut parts);
    parts.join(", ")
}

fn flatten(value: &Value, parts: &mut Vec<String>) {
    match value {
        Value::Array(items) => items.iter().for_each(|item| flatten(item, parts)),
        Value::Object(fields) => fields.values().for_each(|item| flatten(item, parts)),
        Value::String(text) => parts.push(text.clone()),
        Value::Null => {}
        other => parts.push(other.to_string()),
    }
}

/// `null`, `false`, `""` and `0` count as absent
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => false,
        Value::String(text) => !text.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        _ => true,
    }
}

/// Non-empty rendering of a message field
fn present(value: &Value) -> Option<String> {
    match value {
        _ if !is_truthy(value) => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_list_is_joined() {
        let body = r#"{"errors": ["Email is taken", "Phone is invalid"], "message": "ignored"}"#;
        assert_eq!(normalize_error_body(422, body), "Email is taken, Phone is invalid");
    }

    #[test]
    fn error_map_is_flattened() {
        let body = r#"{"errors": {"email": ["Email is taken"], "phone": "Phone is invalid"}}"#;
        assert_eq!(normalize_error_body(400, body), "Email is taken, Phone is invalid");
    }

    #[test]
    fn message_fields_in_order() {
        assert_eq!(
            normalize_error_body(400, r#"{"error": "Bad credentials", "message": "x"}"#),
            "Bad credentials"
        );
        assert_eq!(
            normalize_error_body(400, r#"{"error": "", "message": "Company not found"}"#),
            "Company not found"
        );
        assert_eq!(normalize_error_body(500, r#"{"detail": "boom"}"#), "boom");
    }

    #[test]
    fn falsy_errors_fall_through_to_message_fields() {
        assert_eq!(
            normalize_error_body(400, r#"{"errors": null, "message": "Company not found"}"#),
            "Company not found"
        );
        assert_eq!(
            normalize_error_body(401, r#"{"errors": false, "error": "Bad credentials"}"#),
            "Bad credentials"
        );
        assert_eq!(
            normalize_error_body(400, r#"{"errors": "", "detail": "Invalid token"}"#),
            "Invalid token"
        );
        assert_eq!(
            normalize_error_body(400, r#"{"errors": 0, "message": "Try again"}"#),
            "Try again"
        );
    }

    #[test]
    fn unknown_object_is_stringified() {
        assert_eq!(normalize_error_body(500, r#"{"code": 7}"#), r#"{"code":7}"#);
    }

    #[test]
    fn plain_text_body_is_kept() {
        assert_eq!(normalize_error_body(401, "Unauthorized"), "Unauthorized");
        assert_eq!(normalize_error_body(401, r#""Token expired""#), "Token expired");
    }

    #[test]
    fn empty_body_uses_reason_phrase() {
        assert_eq!(normalize_error_body(404, ""), "Not Found");
        assert_eq!(normalize_error_body(599, "  "), GENERIC_MESSAGE);
    }
}
