//! Input validation for cabinet operations.
//!
//! Validates namespace components, secret names, version identifiers, and
//! values before they reach the store.

use crate::error::{Result, ValidationError};

/// Validate a name used as a namespace or secret component.
///
/// Project, service, and secret names become path segments in the
/// filesystem backend, so they are restricted to a filesystem-safe set:
/// - Only A-Z, a-z, 0-9, underscore, hyphen, and dot
/// - Cannot be empty
/// - Cannot start with a dot
///
/// # Errors
///
/// Returns `ValidationError` if the name is invalid.
pub fn validate_name(field: &'static str, name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ValidationError::Empty(field).into());
    }

    if name.starts_with('.') {
        return Err(ValidationError::InvalidName {
            field,
            value: name.to_string(),
            reason: "cannot start with a dot".to_string(),
        }
        .into());
    }

    for (i, ch) in name.chars().enumerate() {
        if !ch.is_ascii_alphanumeric() && ch != '_' && ch != '-' && ch != '.' {
            return Err(ValidationError::InvalidName {
                field,
                value: name.to_string(),
                reason: format!(
                    "invalid character '{}' at position {}. Only A-Z, 0-9, underscore, hyphen, and dot are allowed",
                    ch,
                    i + 1
                ),
            }
            .into());
        }
    }

    Ok(())
}

/// Validate a version identifier.
///
/// Version ids live inside the secret document and only need to be
/// non-empty; the comparator handles any shape.
pub fn validate_version(version: &str) -> Result<()> {
    if version.is_empty() {
        return Err(ValidationError::Empty("version").into());
    }

    Ok(())
}

/// Validate a version value.
///
/// Values cannot be empty.
pub fn validate_value(version: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(ValidationError::EmptyValue(version.to_string()).into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert!(validate_name("secret", "db-password").is_ok());
        assert!(validate_name("secret", "API_KEY").is_ok());
        assert!(validate_name("project", "billing.v2").is_ok());
        assert!(validate_name("service", "a").is_ok());
    }

    #[test]
    fn test_invalid_names() {
        // Empty
        assert!(validate_name("secret", "").is_err());

        // Leading dot
        assert!(validate_name("secret", ".hidden").is_err());

        // Path separators and other characters
        assert!(validate_name("secret", "a/b").is_err());
        assert!(validate_name("secret", "a\\b").is_err());
        assert!(validate_name("secret", "a b").is_err());
        assert!(validate_name("secret", "a@b").is_err());
    }

    #[test]
    fn test_versions() {
        assert!(validate_version("v1").is_ok());
        assert!(validate_version("1.0.0-rc1").is_ok());
        assert!(validate_version("").is_err());
    }

    #[test]
    fn test_values() {
        assert!(validate_value("v1", "hunter2").is_ok());
        assert!(validate_value("v1", "").is_err());
    }
}
