//! Activity DTOs

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use core_kernel::{ActivityId, PaginationFilters, DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE};
use domain_profile::normalize::normalize_optional;
use domain_profile::{Activity, ActivityQuery, Resource};

/// Query string of `GET /activities`
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct ActivityQueryParams {
    #[serde(alias = "activityId")]
    pub id: Option<String>,
    pub action: Option<String>,
    pub resource_id: Option<String>,
    pub resource_kind: Option<String>,

    #[validate(range(min = 1, message = "The page number must be at least 1."))]
    pub page_number: Option<u32>,

    #[validate(range(min = 1, max = 100, message = "The page size must be between 1 and 100."))]
    pub page_size: Option<u32>,

    pub created_after: Option<NaiveDate>,
    pub created_before: Option<NaiveDate>,
}

impl ActivityQueryParams {
    pub fn pagination(&self) -> PaginationFilters {
        PaginationFilters::new(
            self.page_number.unwrap_or(DEFAULT_PAGE_NUMBER),
            self.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        )
    }

    /// Service query, `None` when the identifier cannot be parsed
    pub fn into_query(self) -> Option<ActivityQuery> {
        let id = match normalize_optional(self.id.clone()) {
            Some(raw) => Some(raw.parse::<ActivityId>().ok()?),
            None => None,
        };

        Some(ActivityQuery {
            id,
            action: normalize_optional(self.action.clone()),
            resource_id: normalize_optional(self.resource_id.clone()),
            resource_kind: normalize_optional(self.resource_kind.clone()),
            pagination: Some(self.pagination()),
            created_after: self.created_after,
            created_before: self.created_before,
        })
    }
}

/// An activity as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityResponse {
    pub identifier: Uuid,
    pub action: String,
    pub description: String,
    pub resource: Resource,
    pub metadata: BTreeMap<String, String>,
    pub created_at: DateTime<Utc>,
}

impl From<Activity> for ActivityResponse {
    fn from(activity: Activity) -> Self {
        Self {
            identifier: activity.id.into(),
            action: activity.action,
            description: activity.description,
            resource: activity.resource,
            metadata: activity.metadata,
            created_at: activity.created_at,
        }
    }
}
