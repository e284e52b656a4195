//! Test Utilities Crate
//!
//! Provides shared test infrastructure for the claims dashboard test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built claim records, tables and CSV text
//! - `assertions`: Assertion helpers for aggregation output
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use assertions::*;
pub use generators::*;
