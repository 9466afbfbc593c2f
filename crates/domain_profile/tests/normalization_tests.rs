//! Property tests for the normalization and validation rules

use proptest::prelude::*;

use domain_profile::normalize::{
    normalize_email, normalize_name, normalize_optional, sanitize_phone_number,
};
use domain_profile::validation::{validate_phone_number, validate_zip_code};

proptest! {
    #[test]
    fn sanitized_phone_numbers_are_digits_only(input in ".{0,40}") {
        let sanitized = sanitize_phone_number(&input);
        prop_assert!(sanitized.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn sanitizing_keeps_every_digit(digits in "[0-9]{10,11}", noise in "[ ()-]{0,5}") {
        let decorated = format!("{}{}", noise, digits);
        prop_assert_eq!(sanitize_phone_number(&decorated), digits);
    }

    #[test]
    fn email_normalization_is_idempotent(email in "[ ]{0,3}[A-Za-z0-9.]{1,20}@[A-Za-z]{1,10}\\.[A-Za-z]{2,3}[ ]{0,3}") {
        let once = normalize_email(&email);
        prop_assert_eq!(normalize_email(&once), once.clone());
        prop_assert_eq!(once.trim(), once.as_str());
        prop_assert_eq!(once.to_lowercase(), once.clone());
    }

    #[test]
    fn emails_differing_in_case_and_padding_collide(local in "[a-z]{1,12}", domain in "[a-z]{1,8}") {
        let plain = format!("{}@{}.com", local, domain);
        let shouted = format!("  {}  ", plain.to_uppercase());
        prop_assert_eq!(normalize_email(&plain), normalize_email(&shouted));
    }

    #[test]
    fn names_are_trimmed(name in "[A-Za-z]{1,20}", pad in "[ \\t]{0,4}") {
        let padded = format!("{}{}{}", pad, name, pad);
        prop_assert_eq!(normalize_name(&padded), name);
    }

    #[test]
    fn blank_optionals_become_none(blank in "[ \\t]{0,6}") {
        prop_assert_eq!(normalize_optional(Some(blank)), None);
    }

    #[test]
    fn mobile_numbers_validate(area in "[1-9][0-9]", number in "9[0-9]{8}") {
        let phone = format!("{}{}", area, number);
        prop_assert!(validate_phone_number(&phone).is_ok());
    }

    #[test]
    fn formatted_zip_codes_validate(head in "[0-9]{5}", tail in "[0-9]{3}") {
        let zip_code = format!("{}-{}", head, tail);
        prop_assert!(validate_zip_code(&zip_code).is_ok());
    }
}
