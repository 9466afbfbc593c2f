use std::sync::Arc;

use tracing::{info, warn};

use core_kernel::{Page, PortError};

use crate::activity::Activity;
use crate::error::ProfileError;
use crate::filters::ProfileFilters;
use crate::ports::{ActivityRepository, ProfileRepository};
use crate::profile::{NewProfile, Profile, ProfileChanges, ProfileStatus};

use super::ProfileQuery;

/// CRUD use cases shared by customers and owners
///
/// The service is written once against the [`Profile`] trait; customers get
/// additional address operations through a dedicated `impl` block.
pub struct ProfileService<P: Profile> {
    pub(super) profiles: Arc<dyn ProfileRepository<P>>,
    pub(super) activities: Arc<dyn ActivityRepository>,
}

impl<P: Profile> Clone for ProfileService<P> {
    fn clone(&self) -> Self {
        Self {
            profiles: Arc::clone(&self.profiles),
            activities: Arc::clone(&self.activities),
        }
    }
}

impl<P: Profile> ProfileService<P> {
    /// Creates a service over the given repositories
    pub fn new(
        profiles: Arc<dyn ProfileRepository<P>>,
        activities: Arc<dyn ActivityRepository>,
    ) -> Self {
        Self { profiles, activities }
    }

    /// Lists profiles matching the query
    ///
    /// Runs the page query and the count query one after the other. Missing
    /// pagination falls back to page 1 of 20.
    pub async fn fetch(&self, query: ProfileQuery<P::Id>) -> Result<Page<P>, ProfileError> {
        let pagination = query.pagination.unwrap_or_default();

        let filters = ProfileFilters::<P::Id>::builder()
            .id(query.id)
            .user_id(query.user_id)
            .email(query.email)
            .phone_number(query.phone_number)
            .name(query.name)
            .is_deleted(query.is_deleted)
            .pagination(pagination)
            .sort(query.sort)
            .created_after(query.created_after)
            .created_before(query.created_before)
            .build();

        let items = self.profiles.find(&filters).await?;
        let total = self.profiles.count(&filters.without_pagination()).await?;

        Ok(Page::new(items, total, pagination))
    }

    /// Loads a profile whatever its status
    ///
    /// # Errors
    ///
    /// `CustomerDoesNotExist` / `OwnerDoesNotExist` if nothing matches
    pub async fn fetch_by_id(&self, id: P::Id) -> Result<P, ProfileError> {
        self.profiles
            .find_one(ProfileFilters::<P::Id>::builder().id(id).build())
            .await?
            .ok_or_else(P::does_not_exist)
    }

    /// Creates a profile and records the creation in the activity trail
    ///
    /// # Errors
    ///
    /// `ProfileAlreadyExists` if an active profile already uses the email,
    /// whether the pre-check finds it or the store rejects the insert
    pub async fn create(&self, new_profile: NewProfile) -> Result<P, ProfileError> {
        let existing = self
            .profiles
            .find_one(
                ProfileFilters::<P::Id>::builder()
                    .email(new_profile.contact.email.clone())
                    .status(ProfileStatus::Active)
                    .build(),
            )
            .await?;

        if existing.is_some() {
            warn!(kind = P::KIND, "Rejected creation with an email already in use");
            return Err(ProfileError::ProfileAlreadyExists);
        }

        let profile = P::create(new_profile);
        self.profiles
            .insert(&profile)
            .await
            .map_err(conflict_as_already_exists)?;

        self.activities
            .insert(&Activity::profile_created(&profile))
            .await?;

        info!(kind = P::KIND, id = %profile.id(), "Profile created");
        Ok(profile)
    }

    /// Overwrites names and contact details of an active profile
    ///
    /// # Errors
    ///
    /// * `CustomerDoesNotExist` / `OwnerDoesNotExist` if no active profile
    ///   has this identifier
    /// * `ProfileAlreadyExists` if the new email belongs to another active
    ///   profile
    pub async fn edit(&self, id: P::Id, changes: ProfileChanges) -> Result<P, ProfileError> {
        let mut profile = self.load_active(id).await?;
        profile.apply_changes(changes);

        self.profiles
            .update(&profile)
            .await
            .map_err(conflict_as_already_exists)?;

        info!(kind = P::KIND, id = %id, "Profile edited");
        Ok(profile)
    }

    /// Soft-deletes an active profile
    ///
    /// # Errors
    ///
    /// `CustomerDoesNotExist` / `OwnerDoesNotExist` if no active profile has
    /// this identifier, including one that was already deleted
    pub async fn delete(&self, id: P::Id) -> Result<(), ProfileError> {
        let mut profile = self.load_active(id).await?;
        profile.mark_deleted();
        self.profiles.delete(&profile).await?;

        info!(kind = P::KIND, id = %id, "Profile deleted");
        Ok(())
    }

    pub(super) async fn load_active(&self, id: P::Id) -> Result<P, ProfileError> {
        self.profiles
            .find_one(
                ProfileFilters::<P::Id>::builder()
                    .id(id)
                    .status(ProfileStatus::Active)
                    .build(),
            )
            .await?
            .ok_or_else(|| {
                warn!(kind = P::KIND, id = %id, "No active profile with this identifier");
                P::does_not_exist()
            })
    }
}

fn conflict_as_already_exists(error: PortError) -> ProfileError {
    if error.is_conflict() {
        ProfileError::ProfileAlreadyExists
    } else {
        ProfileError::Repository(error)
    }
}
