//! # eligibility-core
//!
//! The aggregation layer of the benefit eligibility engine.
//!
//! This crate provides:
//! - The collaborator traits (`ConditionEvaluator`, `SchemaValidator`,
//!   `Translator`, `DocumentVerifier`)
//! - `EligibilityEngine`, which folds per-criterion outcomes into a `Verdict`
//!   and runs both batch modes on top of that single-pair primitive
//!
//! ## Usage
//!
//! ```rust,ignore
//! use eligibility_core::EligibilityEngine;
//!
//! let engine = EligibilityEngine::new(conditions, validator, translator, documents)
//!     .with_parallel(true);
//! let result = engine.check_eligibility(&subject, &schemas, &options);
//! ```

pub mod batch;
pub mod engine;
pub mod format;
pub mod messages;
pub mod traits;

pub use engine::EligibilityEngine;

// ── Tests ─────────────────────────────────────────────────────────────────────
