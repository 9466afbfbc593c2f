//! Contact and user value objects

use serde::{Deserialize, Serialize};

/// How to reach a profile holder
///
/// The email is stored trimmed and lowercased, the phone number as digits
/// only (empty when none was given).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub email: String,
    pub phone_number: String,
}

impl Contact {
    pub fn new(email: impl Into<String>, phone_number: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            phone_number: phone_number.into(),
        }
    }

    pub fn has_phone_number(&self) -> bool {
        !self.phone_number.is_empty()
    }
}

/// Link between a profile and an account of the identity provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Identifier issued by the identity provider
    pub id: String,
    pub username: String,
}

impl User {
    pub fn new(id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
        }
    }
}
