use lazy_static::lazy_static;
use regex::Regex;

use crate::accounts::error::StoreError;

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// Trim surrounding whitespace. Stored casing is preserved; uniqueness
/// and lookups compare case-insensitively.
pub(crate) fn normalize_email(email: &str) -> String {
    email.trim().to_string()
}

pub(crate) fn check_email(email: &str) -> Result<(), StoreError> {
    if email.is_empty() {
        return Err(StoreError::validation("email must not be empty"));
    }
    if !is_valid_email(email) {
        return Err(StoreError::validation("email is not a valid address"));
    }
    Ok(())
}

pub(crate) fn check_hashed_password(hash: &str) -> Result<(), StoreError> {
    if hash.trim().is_empty() {
        return Err(StoreError::validation("hashed_password must not be empty"));
    }
    Ok(())
}
