//! Owner entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::OwnerId;

use crate::contact::{Contact, User};
use crate::error::ProfileError;
use crate::profile::{NewProfile, Profile, ProfileChanges, ProfileStatus};

/// An owner profile
///
/// Same shape as a customer, without addresses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub id: OwnerId,
    pub first_name: String,
    pub last_name: String,
    pub user: User,
    pub contact: Contact,
    pub status: ProfileStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Owner {
    /// Creates a new active owner
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        user: User,
        contact: Contact,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: OwnerId::new_v7(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            user,
            contact,
            status: ProfileStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Profile for Owner {
    type Id = OwnerId;

    const KIND: &'static str = "owner";

    fn create(new_profile: NewProfile) -> Self {
        Owner::new(
            new_profile.first_name,
            new_profile.last_name,
            new_profile.user,
            new_profile.contact,
        )
    }

    fn does_not_exist() -> ProfileError {
        ProfileError::OwnerDoesNotExist
    }

    fn id(&self) -> OwnerId {
        self.id
    }

    fn first_name(&self) -> &str {
        &self.first_name
    }

    fn last_name(&self) -> &str {
        &self.last_name
    }

    fn user(&self) -> &User {
        &self.user
    }

    fn contact(&self) -> &Contact {
        &self.contact
    }

    fn status(&self) -> ProfileStatus {
        self.status
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    fn apply_changes(&mut self, changes: ProfileChanges) {
        self.first_name = changes.first_name;
        self.last_name = changes.last_name;
        self.contact = changes.contact;
        self.updated_at = Utc::now();
    }

    fn mark_deleted(&mut self) {
        self.status = ProfileStatus::Deleted;
        self.updated_at = Utc::now();
    }
}
