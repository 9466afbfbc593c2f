//! Activity trail
//!
//! Activities are append-only audit records. One is written for every
//! profile creation.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use core_kernel::ActivityId;

use crate::profile::Profile;

/// Action codes written by the services
pub mod actions {
    pub const CUSTOMER_CREATION: &str = "comanda.actions.customer.creation";
    pub const OWNER_CREATION: &str = "comanda.actions.owner.creation";
}

/// The entity an activity is about
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    pub kind: String,
}

impl Resource {
    pub fn new(id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
        }
    }
}

/// An audit record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: ActivityId,
    pub action: String,
    pub description: String,
    pub resource: Resource,
    pub metadata: BTreeMap<String, String>,
    pub created_at: DateTime<Utc>,
}

impl Activity {
    /// Creates an activity without metadata
    pub fn new(
        action: impl Into<String>,
        description: impl Into<String>,
        resource: Resource,
    ) -> Self {
        Self {
            id: ActivityId::new_v7(),
            action: action.into(),
            description: description.into(),
            resource,
            metadata: BTreeMap::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds a metadata entry
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Records the creation of a customer or owner
    ///
    /// The action code is `comanda.actions.<kind>.creation` and the metadata
    /// carries `<kind>.identifier` and `<kind>.user.identifier`.
    pub fn profile_created<P: Profile>(profile: &P) -> Self {
        let kind = P::KIND;
        let id: Uuid = profile.id().into();

        Activity::new(
            format!("comanda.actions.{}.creation", kind),
            format!("{} '{}' created.", kind, profile.full_name()),
            Resource::new(id.to_string(), kind),
        )
        .with_metadata(format!("{}.identifier", kind), id.to_string())
        .with_metadata(format!("{}.user.identifier", kind), profile.user().id.clone())
    }
}
