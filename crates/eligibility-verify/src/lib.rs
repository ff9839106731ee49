//! # eligibility-verify
//!
//! Boundary checks for the eligibility engine.
//!
//! - [`engine::JsonSchemaValidator`] implements
//!   [`SchemaValidator`](eligibility_core::traits::SchemaValidator): benefit
//!   schema documents are validated against a bundled JSON Schema via the
//!   `jsonschema` crate before any criterion is evaluated.
//! - [`documents::FlagDocumentVerifier`] implements
//!   [`DocumentVerifier`](eligibility_core::traits::DocumentVerifier) for
//!   document-gated criteria.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use eligibility_verify::engine::JsonSchemaValidator;
//!
//! let validator = JsonSchemaValidator::new()?;
//! let report = validator.validate(&document);
//! ```

pub mod documents;
pub mod engine;

pub use documents::FlagDocumentVerifier;
pub use engine::JsonSchemaValidator;
