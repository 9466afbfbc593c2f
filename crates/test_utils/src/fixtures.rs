//! Pre-built Test Fixtures
//!
//! Ready-to-use profiles and addresses with fixed values. Every fixture is
//! already in normalized form, the way the services store it.

use chrono::NaiveDate;
use domain_profile::{Address, Contact, Customer, NewProfile, Owner, Profile, User};

/// Fixtures for people and their accounts
pub struct PersonFixtures;

impl PersonFixtures {
    /// Richard Garcia, the customer used throughout the suite
    pub fn richard_garcia() -> NewProfile {
        NewProfile {
            first_name: "Richard".to_string(),
            last_name: "Garcia".to_string(),
            user: User::new("auth0|richardgarcia", "richardgarcia"),
            contact: Contact::new("richard.garcia@example.com", "11987654321"),
        }
    }

    /// Ana Souza, a second profile with different contact data
    pub fn ana_souza() -> NewProfile {
        NewProfile {
            first_name: "Ana".to_string(),
            last_name: "Souza".to_string(),
            user: User::new("auth0|anasouza", "anasouza"),
            contact: Contact::new("ana.souza@example.com", "21998765432"),
        }
    }

    /// A profile without a phone number
    pub fn without_phone() -> NewProfile {
        NewProfile {
            first_name: "Bruno".to_string(),
            last_name: "Lima".to_string(),
            user: User::new("auth0|brunolima", "brunolima"),
            contact: Contact::new("bruno.lima@example.com", ""),
        }
    }
}

/// Fixtures for customers and owners
pub struct ProfileFixtures;

impl ProfileFixtures {
    /// Active customer built from [`PersonFixtures::richard_garcia`]
    pub fn customer() -> Customer {
        Customer::create(PersonFixtures::richard_garcia())
    }

    /// Active customer with [`AddressFixtures::home`] assigned
    pub fn customer_with_home() -> Customer {
        let mut customer = Self::customer();
        customer.addresses.push(AddressFixtures::home());
        customer
    }

    /// Active owner built from [`PersonFixtures::ana_souza`]
    pub fn owner() -> Owner {
        Owner::create(PersonFixtures::ana_souza())
    }
}

/// Fixtures for postal addresses
pub struct AddressFixtures;

impl AddressFixtures {
    pub fn home() -> Address {
        Address::new(
            "Avenida Paulista",
            "1578",
            "Bela Vista",
            "São Paulo",
            "SP",
            "01310-200",
        )
    }

    pub fn work() -> Address {
        Address::new(
            "Rua Oscar Freire",
            "379",
            "Jardins",
            "São Paulo",
            "SP",
            "01426-001",
        )
        .with_complement("Sala 12")
    }

    pub fn beach_house() -> Address {
        Address::new(
            "Avenida Atlântica",
            "1702",
            "Copacabana",
            "Rio de Janeiro",
            "RJ",
            "22021-001",
        )
        .with_reference("Em frente ao posto 4")
    }
}

/// Fixtures for calendar days used in date range filters
pub struct DateFixtures;

impl DateFixtures {
    pub fn new_year_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default()
    }

    pub fn end_of_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 31).unwrap_or_default()
    }
}
