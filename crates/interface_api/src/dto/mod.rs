//! Request and response bodies
//!
//! Requests carry their `validator` rules and a mapper into the domain
//! input, which is where wire values get normalized. Responses are built
//! from domain entities.

pub mod activity;
pub mod address;
pub mod profile;
pub mod query;

pub use activity::{ActivityQueryParams, ActivityResponse};
pub use address::{AddressRequest, DeleteAddressRequest, EditAddressRequest};
pub use profile::{CreateProfileRequest, EditProfileRequest, ProfileResponse};
pub use query::ProfileQueryParams;
