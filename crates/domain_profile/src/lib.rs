//! Profile Management Domain
//!
//! This crate manages customer and owner profiles: personal data, contact
//! details, the customers' address books, and the activity trail written
//! when profiles are created.
//!
//! # Profile Model
//!
//! - **Customer**: a person buying from the platform, with a list of addresses
//! - **Owner**: a person running a store on the platform
//!
//! Both share the [`Profile`] trait, so filtering, persistence and the CRUD
//! use cases are written once and instantiated twice. Deleting a profile is
//! a soft delete that moves it to [`ProfileStatus::Deleted`].
//!
//! # Examples
//!
//! ```rust
//! use domain_profile::{Address, Contact, Customer, ProfileError, User};
//!
//! let mut customer = Customer::new(
//!     "Richard",
//!     "Garcia",
//!     User::new("auth0|42", "richardgarcia"),
//!     Contact::new("richard.garcia@example.com", "11999999999"),
//! );
//!
//! let home = Address::new("Avenida Paulista", "1578", "Bela Vista", "São Paulo", "SP", "01310-200");
//! customer.assign_address(home.clone()).unwrap();
//!
//! // The same address cannot be assigned twice
//! assert!(matches!(
//!     customer.assign_address(home),
//!     Err(ProfileError::AddressAlreadyAssigned)
//! ));
//! ```

pub mod activity;
pub mod address;
pub mod contact;
pub mod customer;
pub mod error;
pub mod filters;
pub mod normalize;
pub mod owner;
pub mod ports;
pub mod profile;
pub mod services;
pub mod validation;

pub use activity::{Activity, Resource};
pub use address::Address;
pub use contact::{Contact, User};
pub use customer::Customer;
pub use error::ProfileError;
pub use filters::{
    ActivityFilters, CustomerFilters, OwnerFilters, ProfileFilters, ProfileFiltersBuilder,
    ProfileSortField,
};
pub use owner::Owner;
pub use ports::{ActivityRepository, ProfileRepository};
#[cfg(any(test, feature = "mock"))]
pub use ports::mock::{InMemoryActivityRepository, InMemoryProfileRepository};
pub use profile::{NewProfile, Profile, ProfileChanges, ProfileStatus};
pub use services::{
    ActivityQuery, ActivityService, CustomerService, OwnerService, ProfileQuery, ProfileService,
};
