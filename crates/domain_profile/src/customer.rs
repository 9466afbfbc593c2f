//! Customer entity
//!
//! A customer is a profile that can hold a list of postal addresses. The
//! list never contains two structurally equal addresses; the address
//! operations below enforce that.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::CustomerId;

use crate::address::Address;
use crate::contact::{Contact, User};
use crate::error::ProfileError;
use crate::profile::{NewProfile, Profile, ProfileChanges, ProfileStatus};

/// A customer profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub first_name: String,
    pub last_name: String,
    pub user: User,
    pub contact: Contact,
    pub addresses: Vec<Address>,
    pub status: ProfileStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Customer {
    /// Creates a new active customer without addresses
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        user: User,
        contact: Contact,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: CustomerId::new_v7(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            user,
            contact,
            addresses: Vec::new(),
            status: ProfileStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether a structurally equal address is already assigned
    pub fn has_address(&self, address: &Address) -> bool {
        self.addresses.iter().any(|a| a == address)
    }

    /// Appends an address
    ///
    /// # Errors
    ///
    /// `AddressAlreadyAssigned` if an equal address is already in the list
    pub fn assign_address(&mut self, address: Address) -> Result<(), ProfileError> {
        if self.has_address(&address) {
            return Err(ProfileError::AddressAlreadyAssigned);
        }
        self.addresses.push(address);
        self.touch();
        Ok(())
    }

    /// Replaces `target` with `replacement`
    ///
    /// The target is removed and the replacement appended at the end of the
    /// list. Nothing changes when an error is returned.
    ///
    /// # Errors
    ///
    /// * `AddressDoesNotExist` if `target` is not assigned
    /// * `AddressAlreadyAssigned` if `replacement` equals `target` or any
    ///   other assigned address
    pub fn replace_address(
        &mut self,
        target: &Address,
        replacement: Address,
    ) -> Result<(), ProfileError> {
        let position = self
            .addresses
            .iter()
            .position(|a| a == target)
            .ok_or(ProfileError::AddressDoesNotExist)?;

        if self.has_address(&replacement) {
            return Err(ProfileError::AddressAlreadyAssigned);
        }

        self.addresses.remove(position);
        self.addresses.push(replacement);
        self.touch();
        Ok(())
    }

    /// Removes an address and returns it
    ///
    /// # Errors
    ///
    /// `AddressDoesNotExist` if `target` is not assigned
    pub fn remove_address(&mut self, target: &Address) -> Result<Address, ProfileError> {
        let position = self
            .addresses
            .iter()
            .position(|a| a == target)
            .ok_or(ProfileError::AddressDoesNotExist)?;

        let removed = self.addresses.remove(position);
        self.touch();
        Ok(removed)
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Profile for Customer {
    type Id = CustomerId;

    const KIND: &'static str = "customer";

    fn create(new_profile: NewProfile) -> Self {
        Customer::new(
            new_profile.first_name,
            new_profile.last_name,
            new_profile.user,
            new_profile.contact,
        )
    }

    fn does_not_exist() -> ProfileError {
        ProfileError::CustomerDoesNotExist
    }

    fn id(&self) -> CustomerId {
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
        self.touch();
    }

    fn mark_deleted(&mut self) {
        self.status = ProfileStatus::Deleted;
        self.touch();
    }
}
