//! Customer and owner DTOs
//!
//! Both entities share their wire shape; only the path they are served
//! under differs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use domain_profile::normalize::{
    normalize_email, normalize_name, normalize_text, normalize_username, sanitize_phone_number,
};
use domain_profile::validation::{
    validate_email, validate_name, validate_phone_number, validate_required,
};
use domain_profile::{Contact, NewProfile, Profile, ProfileChanges, User};

/// Body of `POST /customers` and `POST /owners`
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateProfileRequest {
    #[validate(custom(function = "validate_name"))]
    pub first_name: String,

    #[validate(custom(function = "validate_name"))]
    pub last_name: String,

    #[validate(custom(function = "validate_email"))]
    pub email: String,

    #[validate(custom(function = "validate_phone_number"))]
    pub phone_number: String,

    #[validate(custom(function = "validate_required"))]
    pub user_id: String,

    #[validate(length(min = 3, message = "The username must have at least 3 characters."))]
    pub username: String,
}

impl CreateProfileRequest {
    /// Normalizes the payload into a creation input
    pub fn into_new_profile(self) -> NewProfile {
        NewProfile {
            first_name: normalize_name(&self.first_name),
            last_name: normalize_name(&self.last_name),
            user: User::new(normalize_text(&self.user_id), normalize_username(&self.username)),
            contact: Contact::new(
                normalize_email(&self.email),
                sanitize_phone_number(&self.phone_number),
            ),
        }
    }
}

/// Body of `PUT /customers/{id}` and `PUT /owners/{id}`
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct EditProfileRequest {
    #[validate(custom(function = "validate_name"))]
    pub first_name: String,

    #[validate(custom(function = "validate_name"))]
    pub last_name: String,

    #[validate(custom(function = "validate_email"))]
    pub email: String,

    #[validate(custom(function = "validate_phone_number"))]
    pub phone_number: String,
}

impl EditProfileRequest {
    pub fn into_changes(self) -> ProfileChanges {
        ProfileChanges {
            first_name: normalize_name(&self.first_name),
            last_name: normalize_name(&self.last_name),
            contact: Contact::new(
                normalize_email(&self.email),
                sanitize_phone_number(&self.phone_number),
            ),
        }
    }
}

/// A customer or owner as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub identifier: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub user_id: String,
    pub username: String,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProfileResponse {
    pub fn from_profile<P: Profile>(profile: &P) -> Self {
        Self {
            identifier: profile.id().into(),
            first_name: profile.first_name().to_string(),
            last_name: profile.last_name().to_string(),
            email: profile.contact().email.clone(),
            phone_number: profile.contact().phone_number.clone(),
            user_id: profile.user().id.clone(),
            username: profile.user().username.clone(),
            is_deleted: profile.status().is_deleted(),
            created_at: profile.created_at(),
            updated_at: profile.updated_at(),
        }
    }
}
