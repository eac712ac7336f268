//! Private key material and key generation settings.

use zeroize::Zeroizing;

use super::Identity;
use crate::error::{Result, ValidationError};

/// Armored private key text plus the passphrase that unlocks it, if known.
#[derive(Clone)]
pub struct PrivateKeyMaterial {
    armored: Zeroizing<String>,
    passphrase: Option<Zeroizing<String>>,
}

impl PrivateKeyMaterial {
    /// Wrap armored key text.
    pub fn new(armored: impl Into<String>, passphrase: Option<Zeroizing<String>>) -> Self {
        Self {
            armored: Zeroizing::new(armored.into()),
            passphrase,
        }
    }

    /// Armored key text
    pub fn armored(&self) -> &str {
        &self.armored
    }

    /// Passphrase, when one has been resolved
    pub fn passphrase(&self) -> Option<&str> {
        self.passphrase.as_deref().map(String::as_str)
    }

    /// Replace the passphrase.
    pub fn with_passphrase(mut self, passphrase: Option<Zeroizing<String>>) -> Self {
        self.passphrase = passphrase;
        self
    }
}

impl std::fmt::Debug for PrivateKeyMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrivateKeyMaterial")
            .field("armored", &"<redacted>")
            .field("passphrase", &self.passphrase.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Everything needed to generate a new key pair.
pub struct KeySettings {
    identity: Identity,
    passphrase: Zeroizing<String>,
}

impl KeySettings {
    /// Create validated settings.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the identity is invalid or the passphrase
    /// is empty.
    pub fn new(name: &str, email: &str, passphrase: Zeroizing<String>) -> Result<Self> {
        let identity = Identity::new(name, email)?;
        if passphrase.is_empty() {
            return Err(ValidationError::EmptyPassphrase.into());
        }

        Ok(Self {
            identity,
            passphrase,
        })
    }

    /// Owner identity
    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// Passphrase that will lock the private key
    pub fn passphrase(&self) -> &str {
        &self.passphrase
    }

    pub(crate) fn into_passphrase(self) -> Zeroizing<String> {
        self.passphrase
    }
}

impl std::fmt::Debug for KeySettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeySettings")
            .field("identity", &self.identity)
            .finish_non_exhaustive()
    }
}
