//! Secret type.
//!
//! A decrypted secret with its name.

use zeroize::Zeroizing;

use crate::core::types::SecretName;

/// A decrypted secret.
///
/// The value is wiped from memory on drop and never printed by `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret {
    name: SecretName,
    value: Zeroizing<String>,
}

impl Secret {
    /// Create a secret from a name and plaintext value
    pub fn new(name: SecretName, value: Zeroizing<String>) -> Self {
        Self { name, value }
    }

    /// Secret's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Plaintext value
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Secret")
            .field("name", &self.name)
            .field("value", &"<redacted>")
            .finish()
    }
}

impl std::fmt::Display for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
