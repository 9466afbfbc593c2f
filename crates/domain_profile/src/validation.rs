//! Profile validation rules
//!
//! Patterns and custom rules shared by the request validators. They are
//! written against the `validator` crate so they can be referenced from
//! `#[validate(...)]` attributes, and they never consult persistence.
//!
//! # Validation Rules
//!
//! - First and last names: letters only, accents allowed, no spaces
//! - Phone numbers: optional; when present a Brazilian landline or mobile
//!   number, with or without area-code parentheses and dash
//! - Zip codes: Brazilian CEP, `00000-000` or `00000000`
//! - Emails: required, checked after trimming surrounding whitespace
//! - Required text: present and not only whitespace

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use validator::{ValidateEmail, ValidationError};

/// Letters only, including Latin-1 accented letters
pub static NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-zÀ-ÖØ-öø-ÿ]+$").expect("name pattern is valid"));

/// Brazilian phone number: `(11) 99999-9999`, `11999999999`, `1133334444`, ...
pub static PHONE_NUMBER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\(?\d{2}\)?\s?9?\d{4}-?\d{4}$").expect("phone pattern is valid")
});

/// Brazilian postal code (CEP)
pub static ZIP_CODE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{5}-?\d{3}$").expect("zip code pattern is valid"));

fn error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

/// Rejects empty or whitespace-only values
pub fn validate_required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(error("required", "This field is required."));
    }
    Ok(())
}

/// Requires a well-formed email address once surrounding whitespace is trimmed
pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    validate_required(value)?;
    if value.trim().to_string().validate_email() {
        return Ok(());
    }
    Err(error("email", "The email must be a valid email address."))
}

/// Accepts a blank phone number, otherwise requires the Brazilian pattern
pub fn validate_phone_number(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() || PHONE_NUMBER_REGEX.is_match(value) {
        return Ok(());
    }
    Err(error("phone_number", "The phone number must be a valid Brazilian phone number."))
}

/// Requires a valid CEP
pub fn validate_zip_code(value: &str) -> Result<(), ValidationError> {
    if ZIP_CODE_REGEX.is_match(value.trim()) {
        return Ok(());
    }
    Err(error("zip_code", "The zip code must follow the 00000-000 format."))
}

/// Requires a non-blank name made of letters only
pub fn validate_name(value: &str) -> Result<(), ValidationError> {
    validate_required(value)?;
    if NAME_REGEX.is_match(value.trim()) {
        return Ok(());
    }
    Err(error("name", "Names may only contain letters."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        assert!(validate_name("Richard").is_ok());
        assert!(validate_name("João").is_ok());
        assert!(validate_name(" Garcia ").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name("R2D2").is_err());
        assert!(validate_name("Mary Jane").is_err());
    }

    #[test]
    fn test_phone_numbers() {
        assert!(validate_phone_number("11999999999").is_ok());
        assert!(validate_phone_number("(11) 99999-9999").is_ok());
        assert!(validate_phone_number("1133334444").is_ok());
        assert!(validate_phone_number("").is_ok());
        assert!(validate_phone_number("   ").is_ok());
        assert!(validate_phone_number("999").is_err());
        assert!(validate_phone_number("+1 555 0100").is_err());
    }

    #[test]
    fn test_zip_codes() {
        assert!(validate_zip_code("01310-200").is_ok());
        assert!(validate_zip_code("01310200").is_ok());
        assert!(validate_zip_code("0131-0200").is_err());
        assert!(validate_zip_code("").is_err());
    }

    #[test]
    fn test_emails() {
        assert!(validate_email("richard.garcia@example.com").is_ok());
        assert!(validate_email("  Richard.Garcia@Example.com ").is_ok());
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("richard garcia@example.com").is_err());
        assert_eq!(validate_email("   ").unwrap_err().code, "required");
    }

    #[test]
    fn test_required() {
        assert!(validate_required("x").is_ok());
        let err = validate_required(" \t").unwrap_err();
        assert_eq!(err.code, "required");
    }
}
