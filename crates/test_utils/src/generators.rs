//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating request-shaped data, both in
//! the loose form a client may send and in the form the validators accept.

use chrono::NaiveDate;
use proptest::prelude::*;

use domain_profile::Address;

/// Strategy for names the name validator accepts
pub fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-zà-ö]{1,15}"
}

/// Strategy for valid emails, possibly with surrounding whitespace and uppercase letters
pub fn raw_email_strategy() -> impl Strategy<Value = String> {
    ("[ ]{0,2}", "[a-zA-Z][a-zA-Z0-9.]{0,12}", "[a-z]{2,10}", "[ ]{0,2}")
        .prop_map(|(lead, local, domain, trail)| format!("{}{}@{}.com{}", lead, local, domain, trail))
}

/// Strategy for Brazilian phone numbers in every accepted layout
pub fn phone_number_strategy() -> impl Strategy<Value = String> {
    (10u32..100, 0u32..10_000, 0u32..10_000, 0usize..4).prop_map(|(area, head, tail, layout)| {
        match layout {
            0 => format!("{}9{:04}{:04}", area, head, tail),
            1 => format!("({}) 9{:04}-{:04}", area, head, tail),
            2 => format!("({}) {:04}-{:04}", area, head, tail),
            _ => format!("{}{:04}{:04}", area, head, tail),
        }
    })
}

/// Strategy for CEPs with or without the dash
pub fn zip_code_strategy() -> impl Strategy<Value = String> {
    (0u32..100_000, 0u32..1000, any::<bool>()).prop_map(|(head, tail, dashed)| {
        if dashed {
            format!("{:05}-{:03}", head, tail)
        } else {
            format!("{:05}{:03}", head, tail)
        }
    })
}

/// Strategy for addresses whose text fields may carry stray whitespace
pub fn raw_address_strategy() -> impl Strategy<Value = Address> {
    (
        "[ ]{0,2}[A-Z][a-z]{2,12}( [A-Z][a-z]{2,12})?[ ]{0,2}",
        "[1-9][0-9]{0,3}",
        "[A-Z][a-z]{3,12}",
        "[A-Z][a-z]{3,12}",
        "[A-Z]{2}",
        zip_code_strategy(),
        proptest::option::of("[ ]{0,3}|Apto [0-9]{1,3}"),
    )
        .prop_map(|(street, number, neighborhood, city, state, zip_code, complement)| {
            let address = Address::new(street, number, neighborhood, city, state, zip_code);
            match complement {
                Some(complement) => address.with_complement(complement),
                None => address,
            }
        })
}

/// Strategy for calendar days between 2000 and 2099
pub fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (2000i32..2100, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default())
}

/// Strategy for valid page sizes
pub fn page_size_strategy() -> impl Strategy<Value = u32> {
    1u32..=core_kernel::MAX_PAGE_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_profile::validation::{validate_name, validate_phone_number, validate_zip_code};

    proptest! {
        #[test]
        fn generated_names_are_valid(name in name_strategy()) {
            prop_assert!(validate_name(&name).is_ok());
        }

        #[test]
        fn generated_phone_numbers_are_valid(phone in phone_number_strategy()) {
            prop_assert!(validate_phone_number(&phone).is_ok());
        }

        #[test]
        fn generated_zip_codes_are_valid(zip in zip_code_strategy()) {
            prop_assert!(validate_zip_code(&zip).is_ok());
        }
    }
}
