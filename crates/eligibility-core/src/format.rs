//! Rendering helpers for values and reasons.

use serde_json::Value;

use eligibility_contracts::verdict::Reason;

/// Render a JSON value for a human-readable message.
///
/// Strings are unquoted and sequences are comma-separated, so `["a", "b"]`
/// renders as `a, b` and `18` as `18`.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(display_value).collect::<Vec<_>>().join(", "),
        other => other.to_string(),
    }
}

/// Flatten reasons into `"{category}: {message} ({description})"` strings.
pub fn render_reasons(reasons: &[Reason]) -> Vec<String> {
    reasons.iter().map(Reason::render).collect()
}
