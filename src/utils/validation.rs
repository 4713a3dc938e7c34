use serde_json::Value;

/// Text of a command option value, or `None` when the value is empty
///
/// Strings must be non-empty, numbers non-zero and booleans `true`. Null,
/// arrays and objects never count as provided. Non-string values keep their
/// JSON text form.
pub fn provided_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64().is_some_and(|f| f != 0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}
