//! # eligibility-cli
//!
//! Wiring for the `eligibility` binary: builds an `EligibilityEngine` from
//! the standard components and reads subject and schema documents from disk.
//!
//! ```rust,ignore
//! use eligibility_cli::{build_engine, config::CliConfig};
//!
//! let engine = build_engine(&CliConfig::default())?;
//! ```

pub mod config;

use std::path::Path;
use std::sync::Arc;

use serde_json::Value;

use eligibility_condition::StandardConditionEvaluator;
use eligibility_contracts::{
    error::{EligibilityError, EligibilityResult},
    subject::Subject,
};
use eligibility_core::{traits::Translator, EligibilityEngine};
use eligibility_i18n::Catalog;
use eligibility_verify::{FlagDocumentVerifier, JsonSchemaValidator};

use crate::config::CliConfig;

/// Build an engine from the standard components: TOML catalogs (with any
/// configured overrides), the standard condition evaluator, the bundled JSON
/// Schema validator, and flag-based document verification.
pub fn build_engine(config: &CliConfig) -> EligibilityResult<EligibilityEngine> {
    let mut catalog = Catalog::builtin()?;
    for catalog_override in &config.catalogs {
        catalog.load_file(catalog_override.locale, &catalog_override.path)?;
    }
    let translator: Arc<dyn Translator> = Arc::new(catalog);

    Ok(EligibilityEngine::new(
        Arc::new(StandardConditionEvaluator::new(Arc::clone(&translator))),
        Arc::new(JsonSchemaValidator::new()?),
        translator,
        Arc::new(FlagDocumentVerifier),
    )
    .with_parallel(config.parallel))
}

/// Read and parse a JSON file.
pub fn read_json(path: &Path) -> EligibilityResult<Value> {
    let contents = std::fs::read_to_string(path).map_err(|e| EligibilityError::InvalidInput {
        reason: format!("failed to read '{}': {}", path.display(), e),
    })?;
    parse_json(&contents, &path.display().to_string())
}

/// Parse JSON text; `source` names it in error messages.
pub fn parse_json(contents: &str, source: &str) -> EligibilityResult<Value> {
    serde_json::from_str(contents).map_err(|e| EligibilityError::InvalidInput {
        reason: format!("'{source}' is not valid JSON: {e}"),
    })
}

/// Collect schema documents. A document that is a JSON array contributes
/// each of its elements; anything else contributes itself.
pub fn collect_schemas(documents: Vec<Value>) -> Vec<Value> {
    documents
        .into_iter()
        .flat_map(|doc| match doc {
            Value::Array(items) => items,
            other => vec![other],
        })
        .collect()
}

/// Interpret a JSON value as one subject.
pub fn subject_from_value(value: Value) -> EligibilityResult<Subject> {
    match value {
        Value::Object(map) => Ok(Subject::from(map)),
        other => Err(EligibilityError::InvalidInput {
            reason: format!("subject must be a JSON object, got {other}"),
        }),
    }
}

/// Interpret a JSON value as a list of subjects. A single object is accepted
/// as a one-element list.
pub fn subjects_from_value(value: Value) -> EligibilityResult<Vec<Subject>> {
    match value {
        Value::Array(items) => items.into_iter().map(subject_from_value).collect(),
        other => Ok(vec![subject_from_value(other)?]),
    }
}
