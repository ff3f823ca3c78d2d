//! Input validation rules shared by the HTTP and persistence layers.

use std::sync::LazyLock;

use regex::Regex;
use validator::ValidateEmail;

use crate::error::CoreError;

/// Pattern a username must satisfy when used as a path parameter: first
/// character alphanumeric, the rest alphanumeric, underscore, or hyphen.
static USERNAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("^[A-Za-z0-9][A-Za-z0-9_-]*$").expect("username pattern must compile")
});

/// Returns `true` if `username` matches [`USERNAME_PATTERN`].
///
/// An empty string never matches (the pattern requires at least one
/// character).
pub fn is_valid_username(username: &str) -> bool {
    USERNAME_PATTERN.is_match(username)
}

/// Validate that `email` is a syntactically well-formed mail address.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    if email.validate_email() {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid email address: {email}"
        )))
    }
}
