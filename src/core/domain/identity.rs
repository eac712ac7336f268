//! Identity type.
//!
//! The owner of a key pair, as shown to the rest of the team.

use crate::core::slug;
use crate::core::types::Slug;
use crate::core::validation;
use crate::error::Result;

/// A key owner's display name and email.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identity {
    name: String,
    email: String,
}

impl Identity {
    /// Create a validated identity.
    ///
    /// Surrounding whitespace is trimmed from both parts.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidIdentity` if the name is empty or the
    /// email is not an address.
    pub fn new(name: &str, email: &str) -> Result<Self> {
        validation::validate_identity(name, email)?;

        Ok(Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
        })
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Email address
    pub fn email(&self) -> &str {
        &self.email
    }

    /// File name stem for this identity's public key record.
    pub fn slug(&self) -> Slug {
        slug::slug(&self.name, &self.email)
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}
