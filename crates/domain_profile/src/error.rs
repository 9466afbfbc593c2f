//! Profile domain errors
//!
//! Every business failure has a stable catalog code that clients can match
//! on, independent of the human-readable description.

use thiserror::Error;

use core_kernel::PortError;

/// Errors that can occur in the profile domain
#[derive(Debug, Error)]
pub enum ProfileError {
    /// Another active profile already uses the email
    #[error("A profile with this email already exists.")]
    ProfileAlreadyExists,

    #[error("The specified customer does not exist.")]
    CustomerDoesNotExist,

    #[error("The specified owner does not exist.")]
    OwnerDoesNotExist,

    #[error("This address is already assigned to the customer.")]
    AddressAlreadyAssigned,

    #[error("The target address does not exist for this customer.")]
    AddressDoesNotExist,

    /// The underlying store failed; not part of the public catalog
    #[error("Repository failure: {0}")]
    Repository(#[from] PortError),
}

impl ProfileError {
    /// Stable catalog code
    pub fn code(&self) -> &'static str {
        match self {
            ProfileError::ProfileAlreadyExists => "#COMANDA-ERROR-76A71",
            ProfileError::CustomerDoesNotExist => "#COMANDA-ERROR-AF04C",
            ProfileError::OwnerDoesNotExist => "#COMANDA-ERROR-0831D",
            ProfileError::AddressAlreadyAssigned => "#COMANDA-ERROR-4901F",
            ProfileError::AddressDoesNotExist => "#COMANDA-ERROR-2616B",
            ProfileError::Repository(_) => "#COMANDA-ERROR-INTERNAL",
        }
    }

    /// Human-readable description of the condition
    pub fn description(&self) -> String {
        self.to_string()
    }

    /// Whether the error reports a missing profile or address
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ProfileError::CustomerDoesNotExist
                | ProfileError::OwnerDoesNotExist
                | ProfileError::AddressDoesNotExist
        )
    }

    /// Whether the error reports a collision with existing data
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            ProfileError::ProfileAlreadyExists | ProfileError::AddressAlreadyAssigned
        )
    }
}
