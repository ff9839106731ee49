//! Error types for the eligibility engine.
//!
//! Business ineligibility is never an error: it is reported as `Reason`
//! entries inside a successful `Verdict`. The variants below cover structural
//! and programmer errors only: a missing or unrecognized condition, malformed
//! `between` operands, a schema that fails structural validation, bad
//! configuration, or unreadable input. Condition variants carry a message
//! already rendered in the caller's locale.

use thiserror::Error;

/// The unified error type for the eligibility crates.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EligibilityError {
    /// The criterion carries no condition, or the condition is blank.
    #[error("{message}")]
    ConditionRequired { message: String },

    /// The condition is an object that does not carry a string `condition`.
    #[error("{message}")]
    InvalidConditionStructure { message: String },

    /// The normalized condition is not in the recognized operator set.
    #[error("{message}")]
    UnsupportedCondition { condition: String, message: String },

    /// `between` received something other than a two-element array.
    #[error("{message}")]
    BetweenRequiresArray { message: String },

    /// A benefit schema document failed structural validation.
    #[error("schema '{schema_id}' is invalid: {}", errors.join("; "))]
    SchemaInvalid { schema_id: String, errors: Vec<String> },

    /// A required configuration value is missing or invalid.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// A subject or schema input could not be read or parsed.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },
}

impl EligibilityError {
    /// Stable kind tag, used as the `kind` field of batch error entries.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ConditionRequired { .. } => "ConditionRequired",
            Self::InvalidConditionStructure { .. } => "InvalidConditionStructure",
            Self::UnsupportedCondition { .. } => "UnsupportedCondition",
            Self::BetweenRequiresArray { .. } => "BetweenRequiresArray",
            Self::SchemaInvalid { .. } => "SchemaInvalid",
            Self::ConfigError { .. } => "ConfigError",
            Self::InvalidInput { .. } => "InvalidInput",
        }
    }
}

/// Convenience alias used throughout the eligibility crates.
pub type EligibilityResult<T> = Result<T, EligibilityError>;
