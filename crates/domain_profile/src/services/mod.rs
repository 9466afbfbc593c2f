//! Profile domain services
//!
//! Use cases behind the HTTP endpoints. Each one builds filters from the
//! caller's request, queries the repositories, branches on existence or
//! uniqueness, mutates the entity and persists it.

mod activity;
mod customer;
mod profile;

use chrono::NaiveDate;

use core_kernel::{ActivityId, PaginationFilters, SortFilters};

use crate::customer::Customer;
use crate::filters::ProfileSortField;
use crate::owner::Owner;

pub use activity::ActivityService;
pub use profile::ProfileService;

/// Customer use cases, including the address operations
pub type CustomerService = ProfileService<Customer>;

/// Owner use cases
pub type OwnerService = ProfileService<Owner>;

/// What a caller asks for when listing customers or owners
///
/// Email and phone number are expected to be normalized the same way stored
/// profiles are.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileQuery<Id> {
    pub id: Option<Id>,
    pub user_id: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub name: Option<String>,
    pub is_deleted: Option<bool>,
    pub pagination: Option<PaginationFilters>,
    pub sort: Option<SortFilters<ProfileSortField>>,
    pub created_after: Option<NaiveDate>,
    pub created_before: Option<NaiveDate>,
}

impl<Id> Default for ProfileQuery<Id> {
    fn default() -> Self {
        Self {
            id: None,
            user_id: None,
            email: None,
            phone_number: None,
            name: None,
            is_deleted: None,
            pagination: None,
            sort: None,
            created_after: None,
            created_before: None,
        }
    }
}

/// What a caller asks for when listing activities
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityQuery {
    pub id: Option<ActivityId>,
    pub action: Option<String>,
    pub resource_id: Option<String>,
    pub resource_kind: Option<String>,
    pub pagination: Option<PaginationFilters>,
    pub created_after: Option<NaiveDate>,
    pub created_before: Option<NaiveDate>,
}
