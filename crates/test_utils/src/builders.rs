//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! Defaults are random but valid (names from `fake`, unique emails), so that
//! tests only spell out the fields they assert on.

use chrono::{DateTime, Utc};
use fake::faker::address::en::{CityName, StateAbbr, StreetName};
use fake::faker::internet::en::Username;
use fake::Fake;
use uuid::Uuid;

use domain_profile::{Address, Contact, Customer, NewProfile, Owner, Profile, User};

/// Picks a random name and keeps letters only, like the name validator expects
fn letters_only(name: String) -> String {
    let letters: String = name.chars().filter(|c| c.is_alphabetic()).collect();
    if letters.is_empty() {
        "Test".to_string()
    } else {
        letters
    }
}

fn unique_email(username: &str) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{}.{}@example.com", username.to_lowercase(), &suffix[..8])
}

/// Builder for [`NewProfile`] and the entities created from it
#[derive(Debug, Clone)]
pub struct TestProfileBuilder {
    first_name: String,
    last_name: String,
    user_id: String,
    username: String,
    email: String,
    phone_number: String,
    created_at: Option<DateTime<Utc>>,
    addresses: Vec<Address>,
}

impl Default for TestProfileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProfileBuilder {
    /// Creates a new builder with random valid values
    pub fn new() -> Self {
        let first_name = letters_only(fake::faker::name::en::FirstName().fake());
        let last_name = letters_only(fake::faker::name::en::LastName().fake());
        let username: String = letters_only(Username().fake()).to_lowercase();

        Self {
            first_name,
            last_name,
            user_id: format!("auth0|{}", Uuid::new_v4().simple()),
            email: unique_email(&username),
            username,
            phone_number: format!("119{:08}", (0u32..100_000_000).fake::<u32>()),
            created_at: None,
            addresses: Vec::new(),
        }
    }

    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    pub fn with_user(mut self, id: impl Into<String>, username: impl Into<String>) -> Self {
        self.user_id = id.into();
        self.username = username.into();
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = phone_number.into();
        self
    }

    /// Overrides both timestamps of the built entity
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Adds an address; only used by [`TestProfileBuilder::customer`]
    pub fn with_address(mut self, address: Address) -> Self {
        self.addresses.push(address);
        self
    }

    /// Builds the creation payload
    pub fn new_profile(&self) -> NewProfile {
        NewProfile {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            user: User::new(self.user_id.clone(), self.username.clone()),
            contact: Contact::new(self.email.clone(), self.phone_number.clone()),
        }
    }

    /// Builds an active customer
    pub fn customer(self) -> Customer {
        let mut customer = Customer::create(self.new_profile());
        if let Some(created_at) = self.created_at {
            customer.created_at = created_at;
            customer.updated_at = created_at;
        }
        customer.addresses = self.addresses;
        customer
    }

    /// Builds an active owner
    pub fn owner(self) -> Owner {
        let mut owner = Owner::create(self.new_profile());
        if let Some(created_at) = self.created_at {
            owner.created_at = created_at;
            owner.updated_at = created_at;
        }
        owner
    }
}

/// Builder for [`Address`]
#[derive(Debug, Clone)]
pub struct TestAddressBuilder {
    address: Address,
}

impl Default for TestAddressBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestAddressBuilder {
    /// Creates a builder with a random street, number and city
    pub fn new() -> Self {
        let street: String = StreetName().fake();
        let city: String = CityName().fake();
        let state: String = StateAbbr().fake();
        let number = (1u32..5000).fake::<u32>().to_string();
        let zip_code = format!("{:05}-{:03}", (0u32..100_000).fake::<u32>(), (0u32..1000).fake::<u32>());

        Self {
            address: Address::new(street, number, "Centro", city, state, zip_code),
        }
    }

    pub fn with_street(mut self, street: impl Into<String>) -> Self {
        self.address.street = street.into();
        self
    }

    pub fn with_number(mut self, number: impl Into<String>) -> Self {
        self.address.number = number.into();
        self
    }

    pub fn with_zip_code(mut self, zip_code: impl Into<String>) -> Self {
        self.address.zip_code = zip_code.into();
        self
    }

    pub fn with_complement(mut self, complement: impl Into<String>) -> Self {
        self.address.complement = Some(complement.into());
        self
    }

    pub fn build(self) -> Address {
        self.address
    }
}
