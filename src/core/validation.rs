//! Input validation.
//!
//! Validates secret names, values, environment names and identities.

use crate::error::{Result, ValidationError};

/// Validate a secret name.
///
/// Secret names must be valid environment variable names:
/// - Only A-Z, 0-9, and underscore
/// - Cannot start with a digit
/// - Cannot be empty
///
/// # Arguments
///
/// * `key` - The secret name to validate
///
/// # Errors
///
/// Returns `ValidationError` if the name is invalid.
pub fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(ValidationError::EmptyKey.into());
    }

    // Check first character - must not be a digit
    if let Some(first_char) = key.chars().next() {
        if first_char.is_ascii_digit() {
            return Err(ValidationError::InvalidKey {
                key: key.to_string(),
                reason: "cannot start with a digit".to_string(),
            }
            .into());
        }
    }

    // Check all characters - must be A-Z, 0-9, or underscore
    for (i, ch) in key.chars().enumerate() {
        if !ch.is_ascii_alphanumeric() && ch != '_' {
            return Err(ValidationError::InvalidKey {
                key: key.to_string(),
                reason: format!(
                    "invalid character '{}' at position {}. Only A-Z, 0-9, and underscore are allowed",
                    ch, i + 1
                ),
            }
            .into());
        }
    }

    Ok(())
}

/// Validate a secret value.
///
/// Secret values cannot be empty.
///
/// # Arguments
///
/// * `key` - The secret name (for error messages)
/// * `value` - The value to validate
///
/// # Errors
///
/// Returns `ValidationError` if the value is empty.
pub fn validate_value(key: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(ValidationError::EmptyValue(key.to_string()).into());
    }

    Ok(())
}

/// Validate an environment name.
///
/// Environment names become a single directory under the base directory, so
/// they cannot be empty, `.`/`..`, or contain path separators.
pub fn validate_environment(name: &str) -> Result<()> {
    let reason = if name.trim().is_empty() {
        Some("cannot be empty")
    } else if name == "." || name == ".." {
        Some("cannot be a relative path component")
    } else if name.contains('/') || name.contains('\\') {
        Some("cannot contain path separators")
    } else if name.contains('\0') {
        Some("cannot contain NUL")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(ValidationError::InvalidEnvironment {
            name: name.to_string(),
            reason: reason.to_string(),
        }
        .into()),
        None => Ok(()),
    }
}

/// Validate a key owner's identity.
pub fn validate_identity(name: &str, email: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::InvalidIdentity("name cannot be empty".to_string()).into());
    }

    let email = email.trim();
    if !email.contains('@') || email.starts_with('@') || email.ends_with('@') {
        return Err(ValidationError::InvalidIdentity(format!(
            "'{}' is not an email address",
            email
        ))
        .into());
    }
    if email.chars().any(char::is_whitespace) {
        return Err(ValidationError::InvalidIdentity(format!(
            "email '{}' cannot contain whitespace",
            email
        ))
        .into());
    }

    Ok(())
}

/// Validate file permissions (Unix only).
///
/// Checks that a file has the expected permissions mode.
///
/// # Arguments
///
/// * `path` - Path to the file
/// * `expected_mode` - Expected permissions mode (e.g., 0o600)
///
/// # Errors
///
/// Returns `ValidationError` if permissions don't match.
#[cfg(unix)]
pub fn validate_file_permissions(path: &std::path::Path, expected_mode: u32) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let metadata = std::fs::metadata(path)?;
    let actual_mode = metadata.permissions().mode() & 0o777;

    if actual_mode != expected_mode {
        return Err(ValidationError::InvalidPermissions {
            path: path.display().to_string(),
            expected: format!("{:o}", expected_mode),
            actual: format!("{:o}", actual_mode),
        }
        .into());
    }

    Ok(())
}
