//! Core Kernel - Foundational types shared by every crate of the profiles service
//!
//! This crate provides the fundamental building blocks used across the workspace:
//! - Strongly-typed identifiers for customers, owners, and activities
//! - Pagination and sorting primitives, plus the page envelope returned by listings
//! - Port abstractions (errors, health checks) for the hexagonal architecture

pub mod identifiers;
pub mod pagination;
pub mod ports;

pub use identifiers::{CustomerId, OwnerId, ActivityId};
pub use pagination::{
    Page, PaginationFilters, SortDirection, SortFilters,
    DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
};
pub use ports::{
    PortError, DomainPort, HealthCheckable, HealthCheckResult, AdapterHealth,
};
