//! # Form validation for login and registration
//!
//! Field checks run before any directory or storage work, so a rejected form
//! never leaves partial state behind. Each failure carries the exact message
//! the screen shows.
//!
//! The two forms deliberately differ in strictness: login only sanity-checks
//! the address shape (an `@` and a dot somewhere), while registration
//! requires a full `local@domain.tld` address and constrains the username.
//! Checks run in field order and report the first failure.

use crate::error::ApiError;

/// Validate the login form.
pub fn validate_login(email: &str, password: &str) -> Result<(), ApiError> {
    if email.is_empty() || password.is_empty() {
        return Err(ApiError::validation("Please fill in all fields"));
    }
    if !is_plausible_email(email) {
        return Err(ApiError::validation("Please enter a valid email"));
    }
    Ok(())
}

/// Validate the registration form.
pub fn validate_registration(
    name: &str,
    email: &str,
    username: &str,
    password: &str,
    confirm_password: &str,
) -> Result<(), ApiError> {
    if name.is_empty()
        || email.is_empty()
        || username.is_empty()
        || password.is_empty()
        || confirm_password.is_empty()
    {
        return Err(ApiError::validation("Please fill in all fields"));
    }
    if !is_strict_email(email) {
        return Err(ApiError::validation("Please enter a valid email"));
    }
    if !is_valid_username(username) {
        return Err(ApiError::validation(
            "Username must be 3-20 characters long and can only contain letters, numbers, and underscores",
        ));
    }
    if password != confirm_password {
        return Err(ApiError::validation("Passwords do not match"));
    }
    if password.chars().count() < 6 {
        return Err(ApiError::validation(
            "Password must be at least 6 characters long",
        ));
    }
    Ok(())
}

/// Login-strength check: an `@` and a dot, anywhere.
fn is_plausible_email(email: &str) -> bool {
    email.contains('@') && email.contains('.')
}

/// Registration-strength check: `local@domain`, no whitespace, exactly one
/// `@`, and a dot inside the domain with characters on both sides.
fn is_strict_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i < domain.len() - 1)
}

/// 3-20 characters, letters/digits/underscore only.
fn is_valid_username(username: &str) -> bool {
    (3..=20).contains(&username.len())
        && username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}
