//! # eligibility-i18n
//!
//! Locale-aware message rendering for the eligibility engine.
//!
//! [`Catalog`] implements the [`Translator`](eligibility_core::traits::Translator)
//! trait over TOML message files. The `en` and `hi` catalogs ship embedded;
//! deployments can override individual templates with `Catalog::load_file`.

pub mod catalog;

pub use catalog::Catalog;

// ── Tests ─────────────────────────────────────────────────────────────────────
