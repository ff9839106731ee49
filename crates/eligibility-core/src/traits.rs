//! Collaborator traits for the eligibility engine.
//!
//! The engine owns none of these behaviours itself:
//!
//! - `ConditionEvaluator`: resolves operators and decides one comparison
//! - `SchemaValidator`: structural check of a benefit schema document
//! - `Translator`: renders fixed messages in the caller's locale
//! - `DocumentVerifier`: decides whether a subject holds an accepted proof
//!
//! `EligibilityEngine` wires them together. All implementations must be
//! deterministic and free of shared mutable state so batch entries can be
//! evaluated in parallel.

use serde_json::Value;

use eligibility_contracts::{
    batch::ValidationReport,
    error::EligibilityResult,
    options::Locale,
    schema::OperatorSpec,
    subject::Subject,
    verdict::Operator,
};

/// Decides a single criterion: one subject value, one operator, its operands.
pub trait ConditionEvaluator: Send + Sync {
    /// Resolve a wire condition into its canonical operator.
    ///
    /// Fails with `ConditionRequired` when `spec` is absent or blank,
    /// `InvalidConditionStructure` for an unrecognized object shape, and
    /// `UnsupportedCondition` for an unknown operator name.
    fn resolve(&self, spec: Option<&OperatorSpec>, locale: Locale) -> EligibilityResult<Operator>;

    /// Compare `value` against `operands` under `operator`.
    ///
    /// Fails with `BetweenRequiresArray` when `between` does not receive a
    /// two-element array.
    fn evaluate(
        &self,
        value: &Value,
        operator: Operator,
        operands: &Value,
        locale: Locale,
    ) -> EligibilityResult<bool>;
}

/// Structural validation of raw benefit schema documents.
pub trait SchemaValidator: Send + Sync {
    /// Validate `document`. Never fails; violations are reported in the result.
    fn validate(&self, document: &Value) -> ValidationReport;
}

/// Renders message templates in a locale.
pub trait Translator: Send + Sync {
    /// Render `key` in `locale`, substituting `{name}` placeholders from `vars`.
    fn translate(&self, locale: Locale, key: &str, vars: &[(&str, &str)]) -> String;
}

/// Oracle for document-gated criteria.
pub trait DocumentVerifier: Send + Sync {
    /// Return true if `subject` holds at least one verified document whose
    /// type is in `allowed_types`.
    fn has_verified_document(&self, subject: &Subject, allowed_types: &[String]) -> bool;
}
