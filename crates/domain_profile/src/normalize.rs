//! Normalization rules applied when wire payloads become domain values
//!
//! Stored profiles only ever hold normalized data, so lookups (the email
//! uniqueness check in particular) compare normalized values on both sides.

/// Trims surrounding whitespace
pub fn normalize_text(value: &str) -> String {
    value.trim().to_string()
}

/// Trims a person's first or last name
pub fn normalize_name(value: &str) -> String {
    normalize_text(value)
}

/// Trims and lowercases an email address
pub fn normalize_email(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Trims and lowercases a username
pub fn normalize_username(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Keeps only the ASCII digits of a phone number
///
/// `"(11) 99999-9999"` becomes `"11999999999"`.
pub fn sanitize_phone_number(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// Trims an optional value, mapping blank strings to `None`
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| normalize_text(&v))
        .filter(|v| !v.is_empty())
}
