//! Public key record.
//!
//! One registered recipient of an environment's secrets.

use serde::{Deserialize, Serialize};

use super::Identity;
use crate::core::types::{PublicKey, Slug};
use crate::error::{KeyError, Result};

/// A recipient's identity and public key, as stored in `<slug>.asc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKeyRecord {
    identity: Identity,
    public_key: PublicKey,
}

/// On-disk layout of a record.
#[derive(Serialize, Deserialize)]
struct RecordFile {
    name: String,
    email: String,
    public_key: PublicKey,
}

impl PublicKeyRecord {
    /// Create a record for an identity.
    pub fn new(identity: Identity, public_key: PublicKey) -> Self {
        Self {
            identity,
            public_key,
        }
    }

    /// Parse a record from its on-disk text.
    ///
    /// # Errors
    ///
    /// Returns `KeyError::InvalidFormat` if the text is not a record or its
    /// identity is invalid.
    pub fn parse(text: &str) -> Result<Self> {
        let file: RecordFile = toml::from_str(text)
            .map_err(|e| KeyError::InvalidFormat(format!("public key record: {}", e)))?;
        let identity = Identity::new(&file.name, &file.email)
            .map_err(|e| KeyError::InvalidFormat(e.to_string()))?;

        Ok(Self {
            identity,
            public_key: file.public_key.trim().to_string(),
        })
    }

    /// Render the on-disk text.
    pub fn to_text(&self) -> Result<String> {
        let file = RecordFile {
            name: self.identity.name().to_string(),
            email: self.identity.email().to_string(),
            public_key: self.public_key.clone(),
        };
        Ok(toml::to_string(&file)?)
    }

    /// Owner identity
    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// Public key string
    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    /// Registry slug
    pub fn slug(&self) -> Slug {
        self.identity.slug()
    }
}
