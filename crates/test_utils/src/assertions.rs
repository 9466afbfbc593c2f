//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use core_kernel::Page;
use domain_profile::{Activity, Address, Customer, Profile, ProfileError, ProfileStatus};

/// Asserts that an operation failed with the given catalog code
///
/// # Panics
///
/// Panics if the result is `Ok` or carries a different code
pub fn assert_error_code<T: std::fmt::Debug>(result: &Result<T, ProfileError>, expected: &str) {
    match result {
        Ok(value) => panic!("Expected error {}, got Ok({:?})", expected, value),
        Err(error) => assert_eq!(
            error.code(),
            expected,
            "Expected error code {}, got {} ({})",
            expected,
            error.code(),
            error
        ),
    }
}

/// Asserts that a profile is active
pub fn assert_active<P: Profile>(profile: &P) {
    assert_eq!(
        profile.status(),
        ProfileStatus::Active,
        "Expected {} {} to be active",
        P::KIND,
        profile.id()
    );
}

/// Asserts that a profile was soft deleted
pub fn assert_deleted<P: Profile>(profile: &P) {
    assert_eq!(
        profile.status(),
        ProfileStatus::Deleted,
        "Expected {} {} to be deleted",
        P::KIND,
        profile.id()
    );
}

/// Asserts the exact address list of a customer, order included
pub fn assert_addresses(customer: &Customer, expected: &[Address]) {
    assert_eq!(
        customer.addresses.as_slice(),
        expected,
        "Address book of customer {} does not match",
        customer.id
    );
}

/// Asserts that no two addresses of a customer are equal
pub fn assert_no_duplicate_addresses(customer: &Customer) {
    for (i, a) in customer.addresses.iter().enumerate() {
        for b in customer.addresses.iter().skip(i + 1) {
            assert_ne!(a, b, "Customer {} holds a duplicated address", customer.id);
        }
    }
}

/// Asserts the pagination metadata of a page
pub fn assert_page<T>(page: &Page<T>, total: u64, page_number: u32, items: usize) {
    assert_eq!(page.total, total, "Unexpected total");
    assert_eq!(page.page_number, page_number, "Unexpected page number");
    assert_eq!(page.items.len(), items, "Unexpected number of items");
}

/// Asserts that activities are ordered newest first
pub fn assert_newest_first(activities: &[Activity]) {
    for pair in activities.windows(2) {
        assert!(
            pair[0].created_at >= pair[1].created_at,
            "Activity {} is older than {}",
            pair[0].id,
            pair[1].id
        );
    }
}
