//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! profiles service test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built profiles and addresses with predictable values
//! - `builders`: Builder patterns for test data construction, backed by `fake`
//! - `database`: Database test helpers and container management
//! - `assertions`: Custom assertion helpers for domain types
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod database;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use database::*;
pub use assertions::*;
pub use generators::*;
