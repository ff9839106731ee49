//! # eligibility-contracts
//!
//! Shared types, schemas, and contracts for the benefit eligibility engine.
//!
//! All crates in the workspace import from here. No business logic lives in
//! this crate, only data definitions and error types. Every type serializes
//! to the camelCase JSON shape the transport layer relies on.

pub mod batch;
pub mod error;
pub mod options;
pub mod schema;
pub mod subject;
pub mod verdict;
