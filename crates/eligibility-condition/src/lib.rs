//! # eligibility-condition
//!
//! The condition evaluator for the benefit eligibility engine.
//!
//! ## Overview
//!
//! This crate provides [`StandardConditionEvaluator`], which implements the
//! [`ConditionEvaluator`](eligibility_core::traits::ConditionEvaluator)
//! trait. It decides one criterion from three inputs (subject value,
//! operator, operands) after normalizing the operator name and coercing both
//! sides to a comparison type inferred from the operand.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use eligibility_condition::StandardConditionEvaluator;
//! use eligibility_i18n::Catalog;
//!
//! let evaluator = StandardConditionEvaluator::new(Arc::new(Catalog::builtin()?));
//! let passed = evaluator.evaluate_spec(&json!("John"), &"equals".into(), &json!("john"), Locale::En)?;
//! ```

pub mod coerce;
pub mod evaluator;
pub mod operator;

pub use coerce::{infer_comparison_type, ComparisonType};
pub use evaluator::StandardConditionEvaluator;

// ── Tests ─────────────────────────────────────────────────────────────────────
