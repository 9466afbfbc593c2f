//! Profile Domain Ports
//!
//! This module defines the repository ports the profile services depend on,
//! enabling swappable implementations (PostgreSQL, in-memory).
//!
//! # Architecture
//!
//! - [`ProfileRepository`] is generic over the profile type, so customers
//!   and owners share one contract
//! - [`ActivityRepository`] stores the append-only activity trail
//!
//! Adapters:
//!
//! - **PostgreSQL**: `infra_db::PostgresCustomerRepository` and friends
//! - **In-memory**: [`mock`], for tests and local runs without a database
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_profile::ports::ProfileRepository;
//! use std::sync::Arc;
//!
//! let customers: Arc<dyn ProfileRepository<Customer>> =
//!     Arc::new(PostgresCustomerRepository::new(pool.clone()));
//! let service = CustomerService::new(customers, activities);
//! ```

use async_trait::async_trait;

use core_kernel::{DomainPort, HealthCheckable, PaginationFilters, PortError};

use crate::activity::Activity;
use crate::filters::{ActivityFilters, ProfileFilters};
use crate::profile::Profile;

/// Persistence port for customers and owners
///
/// Deleting is a soft delete: the stored status becomes `Deleted` and the
/// record keeps answering queries that do not filter on status.
#[async_trait]
pub trait ProfileRepository<P: Profile>: DomainPort + HealthCheckable {
    /// Returns the profiles matching the filters, sorted and paginated
    async fn find(&self, filters: &ProfileFilters<P::Id>) -> Result<Vec<P>, PortError>;

    /// Counts the profiles matching the filters, ignoring pagination
    async fn count(&self, filters: &ProfileFilters<P::Id>) -> Result<u64, PortError>;

    /// Stores a new profile
    ///
    /// # Errors
    ///
    /// `PortError::Conflict` when another active profile already uses the
    /// same email
    async fn insert(&self, profile: &P) -> Result<(), PortError>;

    /// Overwrites a stored profile
    ///
    /// # Errors
    ///
    /// * `PortError::NotFound` if no profile has this identifier
    /// * `PortError::Conflict` if the new email collides with another
    ///   active profile
    async fn update(&self, profile: &P) -> Result<(), PortError>;

    /// Persists the deleted status of a profile
    async fn delete(&self, profile: &P) -> Result<(), PortError>;

    /// Returns the first profile matching the filters, if any
    async fn find_one(&self, filters: ProfileFilters<P::Id>) -> Result<Option<P>, PortError> {
        let filters = ProfileFilters {
            pagination: Some(PaginationFilters::new(1, 1)),
            ..filters
        };
        let profiles = self.find(&filters).await?;
        Ok(profiles.into_iter().next())
    }
}

/// Persistence port for the activity trail
#[async_trait]
pub trait ActivityRepository: DomainPort + HealthCheckable {
    /// Appends an activity
    async fn insert(&self, activity: &Activity) -> Result<(), PortError>;

    /// Returns matching activities, newest first, paginated
    async fn find(&self, filters: &ActivityFilters) -> Result<Vec<Activity>, PortError>;

    /// Counts matching activities, ignoring pagination
    async fn count(&self, filters: &ActivityFilters) -> Result<u64, PortError>;
}

/// In-memory implementations of the ports
///
/// These adapters keep everything in a `Vec` behind an async lock and are
/// useful for unit testing without a database.
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    use core_kernel::HealthCheckResult;

    fn paginate<T>(items: Vec<T>, pagination: Option<PaginationFilters>) -> Vec<T> {
        match pagination {
            Some(pagination) => items
                .into_iter()
                .skip(pagination.offset() as usize)
                .take(pagination.limit() as usize)
                .collect(),
            None => items,
        }
    }

    /// In-memory profile store
    ///
    /// Uniqueness of the email among active profiles is checked while the
    /// write lock is held, which mirrors the unique index of the database.
    #[derive(Debug)]
    pub struct InMemoryProfileRepository<P> {
        profiles: Arc<RwLock<Vec<P>>>,
    }

    impl<P> Default for InMemoryProfileRepository<P> {
        fn default() -> Self {
            Self {
                profiles: Arc::new(RwLock::new(Vec::new())),
            }
        }
    }

    impl<P: Profile> InMemoryProfileRepository<P> {
        /// Creates an empty store
        pub fn new() -> Self {
            Self::default()
        }

        /// Pre-populates the store, bypassing uniqueness checks
        pub async fn with_profiles(profiles: Vec<P>) -> Self {
            let repository = Self::new();
            repository.profiles.write().await.extend(profiles);
            repository
        }

        /// Snapshot of every stored profile
        pub async fn all(&self) -> Vec<P> {
            self.profiles.read().await.clone()
        }

        fn email_taken(profiles: &[P], profile: &P) -> bool {
            profile.is_active()
                && profiles.iter().any(|other| {
                    other.id() != profile.id()
                        && other.is_active()
                        && other.contact().email == profile.contact().email
                })
        }
    }

    impl<P: Profile> DomainPort for InMemoryProfileRepository<P> {}

    #[async_trait]
    impl<P: Profile> HealthCheckable for InMemoryProfileRepository<P> {
        async fn health_check(&self) -> HealthCheckResult {
            HealthCheckResult::healthy(format!("in-memory-{}-repository", P::KIND))
        }
    }

    #[async_trait]
    impl<P: Profile> ProfileRepository<P> for InMemoryProfileRepository<P> {
        async fn find(&self, filters: &ProfileFilters<P::Id>) -> Result<Vec<P>, PortError> {
            let profiles = self.profiles.read().await;
            let mut results: Vec<P> = profiles
                .iter()
                .filter(|p| filters.matches(*p))
                .cloned()
                .collect();

            let sort = filters.sort_or_default();
            results.sort_by(|a, b| {
                let ordering = sort.field.compare(a, b);
                match sort.direction {
                    core_kernel::SortDirection::Ascending => ordering,
                    core_kernel::SortDirection::Descending => ordering.reverse(),
                }
            });

            Ok(paginate(results, filters.pagination))
        }

        async fn count(&self, filters: &ProfileFilters<P::Id>) -> Result<u64, PortError> {
            let profiles = self.profiles.read().await;
            Ok(profiles.iter().filter(|p| filters.matches(*p)).count() as u64)
        }

        async fn insert(&self, profile: &P) -> Result<(), PortError> {
            let mut profiles = self.profiles.write().await;
            if Self::email_taken(&profiles, profile) {
                return Err(PortError::conflict(format!(
                    "{} email '{}' is already in use",
                    P::KIND,
                    profile.contact().email
                )));
            }
            profiles.push(profile.clone());
            Ok(())
        }

        async fn update(&self, profile: &P) -> Result<(), PortError> {
            let mut profiles = self.profiles.write().await;
            if Self::email_taken(&profiles, profile) {
                return Err(PortError::conflict(format!(
                    "{} email '{}' is already in use",
                    P::KIND,
                    profile.contact().email
                )));
            }
            let stored = profiles
                .iter_mut()
                .find(|p| p.id() == profile.id())
                .ok_or_else(|| PortError::not_found(P::KIND, profile.id()))?;
            *stored = profile.clone();
            Ok(())
        }

        async fn delete(&self, profile: &P) -> Result<(), PortError> {
            let mut profiles = self.profiles.write().await;
            let stored = profiles
                .iter_mut()
                .find(|p| p.id() == profile.id())
                .ok_or_else(|| PortError::not_found(P::KIND, profile.id()))?;
            *stored = profile.clone();
            Ok(())
        }
    }

    /// In-memory activity trail
    #[derive(Debug, Default)]
    pub struct InMemoryActivityRepository {
        activities: Arc<RwLock<Vec<Activity>>>,
    }

    impl InMemoryActivityRepository {
        pub fn new() -> Self {
            Self::default()
        }

        /// Snapshot of every recorded activity, oldest first
        pub async fn all(&self) -> Vec<Activity> {
            self.activities.read().await.clone()
        }
    }

    impl DomainPort for InMemoryActivityRepository {}

    #[async_trait]
    impl HealthCheckable for InMemoryActivityRepository {
        async fn health_check(&self) -> HealthCheckResult {
            HealthCheckResult::healthy("in-memory-activity-repository")
        }
    }

    #[async_trait]
    impl ActivityRepository for InMemoryActivityRepository {
        async fn insert(&self, activity: &Activity) -> Result<(), PortError> {
            self.activities.write().await.push(activity.clone());
            Ok(())
        }

        async fn find(&self, filters: &ActivityFilters) -> Result<Vec<Activity>, PortError> {
            let activities = self.activities.read().await;
            let mut results: Vec<Activity> = activities
                .iter()
                .filter(|a| filters.matches(a))
                .cloned()
                .collect();
            results.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            Ok(paginate(results, filters.pagination))
        }

        async fn count(&self, filters: &ActivityFilters) -> Result<u64, PortError> {
            let activities = self.activities.read().await;
            Ok(activities.iter().filter(|a| filters.matches(a)).count() as u64)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::{InMemoryActivityRepository, InMemoryProfileRepository};
    use super::*;
    use crate::contact::{Contact, User};
    use crate::customer::Customer;
    use crate::filters::CustomerFilters;

    fn customer(email: &str) -> Customer {
        Customer::new(
            "Richard",
            "Garcia",
            User::new("user-1", "richardgarcia"),
            Contact::new(email, "11999999999"),
        )
    }

    #[tokio::test]
    async fn test_mock_insert_and_find() {
        let repository = InMemoryProfileRepository::<Customer>::new();
        let stored = customer("richard.garcia@example.com");
        repository.insert(&stored).await.unwrap();

        let found = repository
            .find_one(CustomerFilters::builder().id(stored.id).build())
            .await
            .unwrap();

        assert_eq!(found, Some(stored));
    }

    #[tokio::test]
    async fn test_mock_rejects_duplicate_active_email() {
        let repository = InMemoryProfileRepository::<Customer>::new();
        repository.insert(&customer("a@example.com")).await.unwrap();

        let result = repository.insert(&customer("a@example.com")).await;
        assert!(matches!(result, Err(PortError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_mock_allows_email_of_deleted_profile() {
        let mut deleted = customer("a@example.com");
        crate::profile::Profile::mark_deleted(&mut deleted);
        let repository = InMemoryProfileRepository::with_profiles(vec![deleted]).await;

        assert!(repository.insert(&customer("a@example.com")).await.is_ok());
    }

    #[tokio::test]
    async fn test_mock_update_unknown_profile() {
        let repository = InMemoryProfileRepository::<Customer>::new();
        let result = repository.update(&customer("a@example.com")).await;
        assert!(matches!(result, Err(PortError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_mock_activity_count_ignores_pagination() {
        let repository = InMemoryActivityRepository::new();
        for n in 0..3 {
            let activity = Activity::profile_created(&customer(&format!("{}@example.com", n)));
            repository.insert(&activity).await.unwrap();
        }

        let filters = ActivityFilters::builder()
            .pagination(PaginationFilters::new(1, 2))
            .build();
        assert_eq!(repository.find(&filters).await.unwrap().len(), 2);
        assert_eq!(repository.count(&filters).await.unwrap(), 3);
    }
}
