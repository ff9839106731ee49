//! Message catalog keys shared by every `Translator` implementation.

pub const CONDITION_REQUIRED: &str = "condition_required";
pub const INVALID_CONDITION_STRUCTURE: &str = "invalid_condition_structure";
pub const UNSUPPORTED_CONDITION: &str = "unsupported_condition";
pub const BETWEEN_REQUIRES_ARRAY: &str = "between_requires_array";
pub const MISSING_FIELD: &str = "missing_field";
pub const DOCUMENT_INVALID: &str = "document_invalid";
pub const CONDITION_FAILED: &str = "condition_failed";

/// Every key a complete catalog must define.
pub const ALL_KEYS: &[&str] = &[
    CONDITION_REQUIRED,
    INVALID_CONDITION_STRUCTURE,
    UNSUPPORTED_CONDITION,
    BETWEEN_REQUIRES_ARRAY,
    MISSING_FIELD,
    DOCUMENT_INVALID,
    CONDITION_FAILED,
];
