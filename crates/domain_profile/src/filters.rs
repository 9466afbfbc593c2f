//! Query filters for profiles and activities
//!
//! A filter is a plain value: every criterion is optional and an absent
//! criterion is simply left out of the query. The builders exist for call
//! sites that assemble criteria one at a time from optional request fields.
//!
//! # Examples
//!
//! ```rust
//! use domain_profile::filters::{CustomerFilters, ProfileSortField};
//! use core_kernel::{PaginationFilters, SortFilters};
//!
//! let filters = CustomerFilters::builder()
//!     .email("richard.garcia@example.com".to_string())
//!     .is_deleted(false)
//!     .pagination(PaginationFilters::new(2, 10))
//!     .sort(SortFilters::descending(ProfileSortField::LastName))
//!     .build();
//!
//! assert_eq!(filters.email.as_deref(), Some("richard.garcia@example.com"));
//! assert!(filters.id.is_none());
//! ```

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{ActivityId, CustomerId, OwnerId, PaginationFilters, SortFilters};

use crate::activity::Activity;
use crate::profile::{Profile, ProfileStatus};

/// Fields profiles can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProfileSortField {
    #[default]
    CreatedAt,
    UpdatedAt,
    FirstName,
    LastName,
    Email,
}

impl ProfileSortField {
    /// Column holding the field in storage
    pub fn column(&self) -> &'static str {
        match self {
            ProfileSortField::CreatedAt => "created_at",
            ProfileSortField::UpdatedAt => "updated_at",
            ProfileSortField::FirstName => "first_name",
            ProfileSortField::LastName => "last_name",
            ProfileSortField::Email => "email",
        }
    }

    /// Orders two profiles by this field, ascending
    pub fn compare<P: Profile>(&self, a: &P, b: &P) -> Ordering {
        match self {
            ProfileSortField::CreatedAt => a.created_at().cmp(&b.created_at()),
            ProfileSortField::UpdatedAt => a.updated_at().cmp(&b.updated_at()),
            ProfileSortField::FirstName => a.first_name().cmp(b.first_name()),
            ProfileSortField::LastName => a.last_name().cmp(b.last_name()),
            ProfileSortField::Email => a.contact().email.cmp(&b.contact().email),
        }
    }
}

/// Start of `date` in UTC
pub fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Start of the day after `date` in UTC, `None` at the end of the calendar
pub fn start_of_next_day(date: NaiveDate) -> Option<DateTime<Utc>> {
    date.succ_opt().map(start_of_day)
}

fn created_within(
    created_at: DateTime<Utc>,
    after: Option<NaiveDate>,
    before: Option<NaiveDate>,
) -> bool {
    if let Some(after) = after {
        if created_at < start_of_day(after) {
            return false;
        }
    }
    if let Some(end) = before.and_then(start_of_next_day) {
        if created_at >= end {
            return false;
        }
    }
    true
}

/// Criteria for listing customers or owners
///
/// `created_after` and `created_before` are inclusive calendar days in UTC.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileFilters<Id> {
    pub id: Option<Id>,
    pub user_id: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    /// Case-insensitive substring of the first or last name
    pub name: Option<String>,
    pub status: Option<ProfileStatus>,
    pub pagination: Option<PaginationFilters>,
    pub sort: Option<SortFilters<ProfileSortField>>,
    pub created_after: Option<NaiveDate>,
    pub created_before: Option<NaiveDate>,
}

pub type CustomerFilters = ProfileFilters<CustomerId>;
pub type OwnerFilters = ProfileFilters<OwnerId>;

impl<Id> Default for ProfileFilters<Id> {
    fn default() -> Self {
        Self {
            id: None,
            user_id: None,
            email: None,
            phone_number: None,
            name: None,
            status: None,
            pagination: None,
            sort: None,
            created_after: None,
            created_before: None,
        }
    }
}

impl<Id> ProfileFilters<Id> {
    /// Starts an empty builder
    pub fn builder() -> ProfileFiltersBuilder<Id> {
        ProfileFiltersBuilder::new()
    }

    /// Sort to apply, `created_at` ascending unless set
    pub fn sort_or_default(&self) -> SortFilters<ProfileSortField> {
        self.sort.unwrap_or_default()
    }

    /// Same criteria without pagination, used to count matches
    pub fn without_pagination(&self) -> Self
    where
        Id: Clone,
    {
        Self {
            pagination: None,
            ..self.clone()
        }
    }

    /// Whether `profile` satisfies every criterion (pagination aside)
    pub fn matches<P>(&self, profile: &P) -> bool
    where
        P: Profile<Id = Id>,
        Id: PartialEq,
    {
        if let Some(id) = &self.id {
            if profile.id() != *id {
                return false;
            }
        }
        if let Some(user_id) = &self.user_id {
            if &profile.user().id != user_id {
                return false;
            }
        }
        if let Some(email) = &self.email {
            if &profile.contact().email != email {
                return false;
            }
        }
        if let Some(phone_number) = &self.phone_number {
            if &profile.contact().phone_number != phone_number {
                return false;
            }
        }
        if let Some(name) = &self.name {
            let needle = name.to_lowercase();
            if !profile.first_name().to_lowercase().contains(&needle)
                && !profile.last_name().to_lowercase().contains(&needle)
            {
                return false;
            }
        }
        if let Some(status) = self.status {
            if profile.status() != status {
                return false;
            }
        }
        created_within(profile.created_at(), self.created_after, self.created_before)
    }
}

/// Fluent builder for [`ProfileFilters`]
#[derive(Debug, Clone)]
pub struct ProfileFiltersBuilder<Id> {
    filters: ProfileFilters<Id>,
}

impl<Id> ProfileFiltersBuilder<Id> {
    pub fn new() -> Self {
        Self {
            filters: ProfileFilters::default(),
        }
    }

    pub fn id(mut self, id: impl Into<Option<Id>>) -> Self {
        self.filters.id = id.into();
        self
    }

    pub fn user_id(mut self, user_id: impl Into<Option<String>>) -> Self {
        self.filters.user_id = user_id.into();
        self
    }

    pub fn email(mut self, email: impl Into<Option<String>>) -> Self {
        self.filters.email = email.into();
        self
    }

    pub fn phone_number(mut self, phone_number: impl Into<Option<String>>) -> Self {
        self.filters.phone_number = phone_number.into();
        self
    }

    pub fn name(mut self, name: impl Into<Option<String>>) -> Self {
        self.filters.name = name.into();
        self
    }

    pub fn status(mut self, status: impl Into<Option<ProfileStatus>>) -> Self {
        self.filters.status = status.into();
        self
    }

    /// Sets the status from the wire-level soft-delete flag
    pub fn is_deleted(mut self, is_deleted: impl Into<Option<bool>>) -> Self {
        self.filters.status = is_deleted.into().map(ProfileStatus::from_is_deleted);
        self
    }

    pub fn pagination(mut self, pagination: impl Into<Option<PaginationFilters>>) -> Self {
        self.filters.pagination = pagination.into();
        self
    }

    pub fn sort(mut self, sort: impl Into<Option<SortFilters<ProfileSortField>>>) -> Self {
        self.filters.sort = sort.into();
        self
    }

    pub fn created_after(mut self, date: impl Into<Option<NaiveDate>>) -> Self {
        self.filters.created_after = date.into();
        self
    }

    pub fn created_before(mut self, date: impl Into<Option<NaiveDate>>) -> Self {
        self.filters.created_before = date.into();
        self
    }

    pub fn build(self) -> ProfileFilters<Id> {
        self.filters
    }
}

impl<Id> Default for ProfileFiltersBuilder<Id> {
    fn default() -> Self {
        Self::new()
    }
}

/// Criteria for listing activities
///
/// Activities are always returned newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityFilters {
    pub id: Option<ActivityId>,
    pub action: Option<String>,
    pub resource_id: Option<String>,
    pub resource_kind: Option<String>,
    pub pagination: Option<PaginationFilters>,
    pub created_after: Option<NaiveDate>,
    pub created_before: Option<NaiveDate>,
}

impl ActivityFilters {
    pub fn builder() -> ActivityFiltersBuilder {
        ActivityFiltersBuilder::default()
    }

    pub fn without_pagination(&self) -> Self {
        Self {
            pagination: None,
            ..self.clone()
        }
    }

    pub fn matches(&self, activity: &Activity) -> bool {
        if let Some(id) = &self.id {
            if activity.id != *id {
                return false;
            }
        }
        if let Some(action) = &self.action {
            if &activity.action != action {
                return false;
            }
        }
        if let Some(resource_id) = &self.resource_id {
            if &activity.resource.id != resource_id {
                return false;
            }
        }
        if let Some(resource_kind) = &self.resource_kind {
            if &activity.resource.kind != resource_kind {
                return false;
            }
        }
        created_within(activity.created_at, self.created_after, self.created_before)
    }
}

/// Fluent builder for [`ActivityFilters`]
#[derive(Debug, Clone, Default)]
pub struct ActivityFiltersBuilder {
    filters: ActivityFilters,
}

impl ActivityFiltersBuilder {
    pub fn id(mut self, id: impl Into<Option<ActivityId>>) -> Self {
        self.filters.id = id.into();
        self
    }

    pub fn action(mut self, action: impl Into<Option<String>>) -> Self {
        self.filters.action = action.into();
        self
    }

    pub fn resource_id(mut self, resource_id: impl Into<Option<String>>) -> Self {
        self.filters.resource_id = resource_id.into();
        self
    }

    pub fn resource_kind(mut self, resource_kind: impl Into<Option<String>>) -> Self {
        self.filters.resource_kind = resource_kind.into();
        self
    }

    pub fn pagination(mut self, pagination: impl Into<Option<PaginationFilters>>) -> Self {
        self.filters.pagination = pagination.into();
        self
    }

    pub fn created_after(mut self, date: impl Into<Option<NaiveDate>>) -> Self {
        self.filters.created_after = date.into();
        self
    }

    pub fn created_before(mut self, date: impl Into<Option<NaiveDate>>) -> Self {
        self.filters.created_before = date.into();
        self
    }

    pub fn build(self) -> ActivityFilters {
        self.filters
    }
}
