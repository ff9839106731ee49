//! Comparison-type inference and value coercion.
//!
//! The comparison type is driven by the *operand*, never the subject value:
//! take the operand's first element if it is a sequence, then
//!
//! - a JSON number, or a string that parses as one  → `Number`
//! - a JSON boolean, or the string `"true"`/`"false"` → `Boolean`
//! - anything else                                   → `Text`
//!
//! Both sides are then coerced to that type. Text coercion lower-cases, which
//! makes every string comparison case-insensitive.

use std::cmp::Ordering;

use serde_json::Value;

static NULL: Value = Value::Null;

/// The type both sides of a comparison are coerced to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonType {
    Number,
    Boolean,
    Text,
}

/// A value after coercion to a `ComparisonType`.
#[derive(Debug, Clone, PartialEq)]
pub enum Coerced {
    Number(f64),
    Boolean(bool),
    Text(String),
}

impl PartialOrd for Coerced {
    /// Numbers compare numerically (NaN is unordered), booleans as
    /// `false < true`, text lexicographically. Values of different kinds are
    /// unordered.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Coerced::Number(a), Coerced::Number(b)) => a.partial_cmp(b),
            (Coerced::Boolean(a), Coerced::Boolean(b)) => Some(a.cmp(b)),
            (Coerced::Text(a), Coerced::Text(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

/// Reduce a sequence to its first element. An empty sequence reduces to
/// `null`; scalars are returned unchanged.
pub fn first_scalar(value: &Value) -> &Value {
    match value {
        Value::Array(items) => items.first().map(first_scalar).unwrap_or(&NULL),
        other => other,
    }
}

/// Infer the comparison type from an operand (scalar or sequence).
pub fn infer_comparison_type(operand: &Value) -> ComparisonType {
    match first_scalar(operand) {
        Value::Number(_) => ComparisonType::Number,
        Value::String(s) if parse_number(s).is_some() => ComparisonType::Number,
        Value::Bool(_) => ComparisonType::Boolean,
        Value::String(s) if bool_literal(s).is_some() => ComparisonType::Boolean,
        _ => ComparisonType::Text,
    }
}

/// Coerce a value to `target`. Sequences are reduced to their first element.
pub fn coerce(value: &Value, target: ComparisonType) -> Coerced {
    let value = first_scalar(value);
    match target {
        ComparisonType::Number => Coerced::Number(to_number(value)),
        ComparisonType::Boolean => Coerced::Boolean(truthy(value)),
        ComparisonType::Text => Coerced::Text(to_text(value).to_lowercase()),
    }
}

/// Trimmed float parse. Infinity spellings (`inf`, `Infinity`, any case) are
/// numbers; `NaN` is not.
fn parse_number(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| !n.is_nan())
}

fn bool_literal(s: &str) -> Option<bool> {
    if s.eq_ignore_ascii_case("true") {
        Some(true)
    } else if s.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

fn to_number(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) if s.trim().is_empty() => 0.0,
        Value::String(s) => parse_number(s).unwrap_or(f64::NAN),
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Null => 0.0,
        Value::Array(_) | Value::Object(_) => f64::NAN,
    }
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => bool_literal(s).unwrap_or(!s.is_empty()),
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::Null => false,
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn infers_type_from_first_operand_element() {
        assert_eq!(infer_comparison_type(&json!(18)), ComparisonType::Number);
        assert_eq!(infer_comparison_type(&json!(" 2.5 ")), ComparisonType::Number);
        assert_eq!(infer_comparison_type(&json!(["10", "x"])), ComparisonType::Number);
        assert_eq!(infer_comparison_type(&json!(true)), ComparisonType::Boolean);
        assert_eq!(infer_comparison_type(&json!("FALSE")), ComparisonType::Boolean);
        assert_eq!(infer_comparison_type(&json!(["apple", 1])), ComparisonType::Text);
        assert_eq!(infer_comparison_type(&json!("")), ComparisonType::Text);
        assert_eq!(infer_comparison_type(&json!("NaN")), ComparisonType::Text);
        assert_eq!(infer_comparison_type(&json!([])), ComparisonType::Text);
        assert_eq!(infer_comparison_type(&json!(null)), ComparisonType::Text);
    }

    #[test]
    fn number_coercion_follows_numeric_parse() {
        assert_eq!(coerce(&json!("42"), ComparisonType::Number), Coerced::Number(42.0));
        assert_eq!(coerce(&json!(""), ComparisonType::Number), Coerced::Number(0.0));
        assert_eq!(coerce(&json!(true), ComparisonType::Number), Coerced::Number(1.0));
        assert_eq!(coerce(&json!(null), ComparisonType::Number), Coerced::Number(0.0));
        assert!(matches!(
            coerce(&json!("abc"), ComparisonType::Number),
            Coerced::Number(n) if n.is_nan()
        ));
    }

    #[test]
    fn infinity_spellings_are_numbers() {
        assert_eq!(infer_comparison_type(&json!("INF")), ComparisonType::Number);
        assert_eq!(infer_comparison_type(&json!("-infinity")), ComparisonType::Number);
        assert_eq!(
            coerce(&json!("inf"), ComparisonType::Number),
            coerce(&json!("Infinity"), ComparisonType::Number)
        );
        assert_eq!(coerce(&json!(" -Inf "), ComparisonType::Number), Coerced::Number(f64::NEG_INFINITY));
        assert_eq!(infer_comparison_type(&json!("NaN")), ComparisonType::Text);
    }

    #[test]
    fn sequences_reduce_to_first_element() {
        assert_eq!(coerce(&json!([7, 99]), ComparisonType::Number), Coerced::Number(7.0));
        assert_eq!(coerce(&json!([]), ComparisonType::Text), Coerced::Text("null".to_string()));
    }

    #[test]
    fn boolean_coercion_uses_truthiness() {
        assert_eq!(coerce(&json!("false"), ComparisonType::Boolean), Coerced::Boolean(false));
        assert_eq!(coerce(&json!("True"), ComparisonType::Boolean), Coerced::Boolean(true));
        assert_eq!(coerce(&json!("yes"), ComparisonType::Boolean), Coerced::Boolean(true));
        assert_eq!(coerce(&json!(""), ComparisonType::Boolean), Coerced::Boolean(false));
        assert_eq!(coerce(&json!(0), ComparisonType::Boolean), Coerced::Boolean(false));
        assert_eq!(coerce(&json!(3), ComparisonType::Boolean), Coerced::Boolean(true));
        assert_eq!(coerce(&json!(null), ComparisonType::Boolean), Coerced::Boolean(false));
    }

    #[test]
    fn text_coercion_lower_cases() {
        assert_eq!(coerce(&json!("John"), ComparisonType::Text), Coerced::Text("john".to_string()));
        assert_eq!(coerce(&json!(12), ComparisonType::Text), Coerced::Text("12".to_string()));
        assert_eq!(coerce(&json!(false), ComparisonType::Text), Coerced::Text("false".to_string()));
    }

    #[test]
    fn mixed_kinds_are_unordered() {
        assert_eq!(Coerced::Number(1.0).partial_cmp(&Coerced::Text("1".to_string())), None);
        assert!(Coerced::Boolean(false) < Coerced::Boolean(true));
        assert!(Coerced::Text("apple".to_string()) < Coerced::Text("banana".to_string()));
        assert_eq!(Coerced::Number(f64::NAN).partial_cmp(&Coerced::Number(1.0)), None);
    }
}
