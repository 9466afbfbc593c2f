//! Infrastructure Database Layer
//!
//! This crate provides the PostgreSQL adapters for the profile domain ports
//! using SQLx.
//!
//! # Architecture
//!
//! The crate follows the repository pattern: each repository implements a
//! port trait of `domain_profile`, hiding SQL from the services.
//!
//! # Storage Model
//!
//! - `customers` and `owners` hold one row per profile; a customer's
//!   addresses live in a JSONB column
//! - `activities` holds the audit trail, metadata in JSONB
//! - Partial unique indexes on `email WHERE status = 'active'` make
//!   concurrent duplicate creations fail with a unique violation, surfaced
//!   as `PortError::Conflict`
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{DatabaseConfig, create_pool, run_migrations, PostgresCustomerRepository};
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/profiles")).await?;
//! run_migrations(&pool).await?;
//! let customers = PostgresCustomerRepository::new(pool);
//! ```

pub mod pool;
pub mod error;
pub mod repositories;

pub use pool::{DatabasePool, create_pool, run_migrations, DatabaseConfig};
pub use error::DatabaseError;
pub use repositories::{
    PostgresActivityRepository, PostgresCustomerRepository, PostgresOwnerRepository,
};
