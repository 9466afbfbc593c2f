//! Query string of the profile listings

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::{PaginationFilters, SortDirection, SortFilters, DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE};
use domain_profile::normalize::{normalize_email, normalize_optional, sanitize_phone_number};
use domain_profile::{ProfileQuery, ProfileSortField};

/// Query string of `GET /customers` and `GET /owners`
///
/// The identifier is accepted as `customerId`, `ownerId` or `id`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct ProfileQueryParams {
    #[serde(alias = "customerId", alias = "ownerId")]
    pub id: Option<String>,
    pub user_id: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub name: Option<String>,
    pub is_deleted: Option<bool>,

    #[validate(range(min = 1, message = "The page number must be at least 1."))]
    pub page_number: Option<u32>,

    #[validate(range(min = 1, max = 100, message = "The page size must be between 1 and 100."))]
    pub page_size: Option<u32>,

    pub sort_by: Option<ProfileSortField>,
    pub sort_direction: Option<SortDirection>,

    pub created_after: Option<NaiveDate>,
    pub created_before: Option<NaiveDate>,
}

impl ProfileQueryParams {
    /// Requested page, defaults applied
    pub fn pagination(&self) -> PaginationFilters {
        PaginationFilters::new(
            self.page_number.unwrap_or(DEFAULT_PAGE_NUMBER),
            self.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        )
    }

    /// Requested sort, if any part of it was given
    pub fn sort(&self) -> Option<SortFilters<ProfileSortField>> {
        if self.sort_by.is_none() && self.sort_direction.is_none() {
            return None;
        }
        Some(SortFilters {
            field: self.sort_by.unwrap_or_default(),
            direction: self.sort_direction.unwrap_or_default(),
        })
    }

    /// Normalized service query
    ///
    /// `None` when the identifier cannot be parsed, since no profile can
    /// match it.
    pub fn into_query<Id: FromStr>(self) -> Option<ProfileQuery<Id>> {
        let id = match normalize_optional(self.id.clone()) {
            Some(raw) => Some(raw.parse::<Id>().ok()?),
            None => None,
        };

        Some(ProfileQuery {
            id,
            user_id: normalize_optional(self.user_id.clone()),
            email: normalize_optional(self.email.clone()).map(|e| normalize_email(&e)),
            phone_number: normalize_optional(self.phone_number.clone())
                .map(|p| sanitize_phone_number(&p)),
            name: normalize_optional(self.name.clone()),
            is_deleted: self.is_deleted,
            pagination: Some(self.pagination()),
            sort: self.sort(),
            created_after: self.created_after,
            created_before: self.created_before,
        })
    }
}
