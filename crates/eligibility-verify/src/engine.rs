//! JSON Schema validator for benefit schema documents.
//!
//! `JsonSchemaValidator` implements the `SchemaValidator` trait from
//! eligibility-core. The bundled JSON Schema is compiled once at construction
//! and reused for every document. All violations are collected so callers
//! see the full failure set in one report.
//!
//! The check is structural only: it guarantees the document deserializes
//! into `BenefitSchema`. Condition names are not checked here; an unknown or
//! missing operator is reported per (subject, schema) pair by the condition
//! evaluator.

use tracing::{debug, warn};

use eligibility_contracts::{
    batch::ValidationReport,
    error::{EligibilityError, EligibilityResult},
};
use eligibility_core::traits::SchemaValidator;

const BENEFIT_SCHEMA: &str = include_str!("../schemas/benefit-schema.json");

/// Structural validator backed by a compiled JSON Schema document.
pub struct JsonSchemaValidator {
    validator: jsonschema::Validator,
}

impl JsonSchemaValidator {
    /// Compile the bundled benefit-schema JSON Schema.
    pub fn new() -> EligibilityResult<Self> {
        let schema: serde_json::Value =
            serde_json::from_str(BENEFIT_SCHEMA).map_err(|e| EligibilityError::ConfigError {
                reason: format!("bundled benefit schema is not valid JSON: {e}"),
            })?;
        Self::from_schema(&schema)
    }

    /// Compile a caller-supplied JSON Schema document.
    ///
    /// Returns `EligibilityError::ConfigError` if `schema` is not a valid
    /// JSON Schema.
    pub fn from_schema(schema: &serde_json::Value) -> EligibilityResult<Self> {
        let validator = jsonschema::validator_for(schema).map_err(|e| EligibilityError::ConfigError {
            reason: format!("invalid JSON Schema document: {e}"),
        })?;
        Ok(Self { validator })
    }
}

impl SchemaValidator for JsonSchemaValidator {
    fn validate(&self, document: &serde_json::Value) -> ValidationReport {
        let errors: Vec<String> = self
            .validator
            .iter_errors(document)
            .map(|error| {
                let message = format!("{}: {}", error.instance_path, error);
                warn!(%message, "benefit schema violation");
                message
            })
            .collect();

        debug!(violations = errors.len(), "benefit schema validated");
        ValidationReport::from_errors(errors)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
