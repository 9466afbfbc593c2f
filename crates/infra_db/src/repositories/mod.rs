//! Repository implementations for the profile domain ports
//!
//! Repositories encapsulate SQL and map between database rows and domain
//! types. Queries are assembled at runtime with `sqlx::QueryBuilder` because
//! every listing criterion is optional.
//!
//! # Architecture
//!
//! Each repository follows these principles:
//! - Every optional filter becomes a bound parameter, never interpolated text
//! - Sort columns come from a closed enumeration
//! - Row structs are decoded with `sqlx::FromRow` and converted into domain
//!   values with `TryFrom`, so malformed rows surface as transformation errors

mod query;

pub mod activity;
pub mod customer;
pub mod owner;

pub use activity::PostgresActivityRepository;
pub use customer::PostgresCustomerRepository;
pub use owner::PostgresOwnerRepository;
