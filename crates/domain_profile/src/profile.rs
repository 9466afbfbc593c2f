//! Behaviour shared by customers and owners
//!
//! Customers and owners are two near-identical entities: both carry a name,
//! a link to an identity-provider user, contact details and a soft-delete
//! status. The [`Profile`] trait captures that common shape so that
//! filtering, persistence and the CRUD use cases are written once.

use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::contact::{Contact, User};
use crate::error::ProfileError;

/// Lifecycle status of a profile
///
/// Deleting a profile never removes the record, it moves it to `Deleted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileStatus {
    #[default]
    Active,
    Deleted,
}

impl ProfileStatus {
    /// Maps the `isDeleted` flag used on the wire
    pub fn from_is_deleted(is_deleted: bool) -> Self {
        if is_deleted {
            ProfileStatus::Deleted
        } else {
            ProfileStatus::Active
        }
    }

    pub fn is_deleted(&self) -> bool {
        matches!(self, ProfileStatus::Deleted)
    }

    /// Storage representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileStatus::Active => "active",
            ProfileStatus::Deleted => "deleted",
        }
    }
}

impl fmt::Display for ProfileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProfileStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(ProfileStatus::Active),
            "deleted" => Ok(ProfileStatus::Deleted),
            other => Err(format!("unknown profile status '{}'", other)),
        }
    }
}

/// Data needed to create a profile, already normalized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProfile {
    pub first_name: String,
    pub last_name: String,
    pub user: User,
    pub contact: Contact,
}

/// Fields overwritten by an edit, already normalized
///
/// The user link is fixed at creation and cannot be edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileChanges {
    pub first_name: String,
    pub last_name: String,
    pub contact: Contact,
}

/// Common shape of customers and owners
pub trait Profile: fmt::Debug + Clone + Send + Sync + 'static {
    /// Strongly-typed identifier of the entity
    type Id: Copy + Eq + Hash + fmt::Display + fmt::Debug + Into<Uuid> + Send + Sync + 'static;

    /// Lowercase entity name, used for activity codes and error messages
    const KIND: &'static str;

    /// Builds a brand new active profile
    fn create(new_profile: NewProfile) -> Self;

    /// Error reported when no active profile matches an identifier
    fn does_not_exist() -> ProfileError;

    fn id(&self) -> Self::Id;
    fn first_name(&self) -> &str;
    fn last_name(&self) -> &str;
    fn user(&self) -> &User;
    fn contact(&self) -> &Contact;
    fn status(&self) -> ProfileStatus;
    fn created_at(&self) -> DateTime<Utc>;
    fn updated_at(&self) -> DateTime<Utc>;

    /// Overwrites names and contact details
    fn apply_changes(&mut self, changes: ProfileChanges);

    /// Moves the profile to the `Deleted` status
    fn mark_deleted(&mut self);

    fn full_name(&self) -> String {
        format!("{} {}", self.first_name(), self.last_name())
    }

    fn is_active(&self) -> bool {
        self.status() == ProfileStatus::Active
    }
}
