use std::sync::Arc;

use core_kernel::Page;

use crate::activity::Activity;
use crate::error::ProfileError;
use crate::filters::ActivityFilters;
use crate::ports::ActivityRepository;

use super::ActivityQuery;

/// Read side of the activity trail
#[derive(Clone)]
pub struct ActivityService {
    activities: Arc<dyn ActivityRepository>,
}

impl ActivityService {
    pub fn new(activities: Arc<dyn ActivityRepository>) -> Self {
        Self { activities }
    }

    /// Lists activities matching the query, newest first
    pub async fn fetch(&self, query: ActivityQuery) -> Result<Page<Activity>, ProfileError> {
        let pagination = query.pagination.unwrap_or_default();

        let filters = ActivityFilters::builder()
            .id(query.id)
            .action(query.action)
            .resource_id(query.resource_id)
            .resource_kind(query.resource_kind)
            .pagination(pagination)
            .created_after(query.created_after)
            .created_before(query.created_before)
            .build();

        let items = self.activities.find(&filters).await?;
        let total = self.activities.count(&filters.without_pagination()).await?;

        Ok(Page::new(items, total, pagination))
    }
}
