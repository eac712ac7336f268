//! Public key registry.
//!
//! The recipients of an environment: one `<slug>.asc` file per registered
//! identity under `<env>/pubkeys`.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::core::constants;
use crate::core::domain::{Identity, PublicKeyRecord};
use crate::core::environment::Environment;
use crate::core::types::Slug;
use crate::error::{KeyError, Result};

/// Registered public keys of one environment.
#[derive(Debug, Clone)]
pub struct PubKeyRegistry {
    env: Environment,
}

impl PubKeyRegistry {
    /// Registry of an environment.
    pub fn new(env: Environment) -> Self {
        Self { env }
    }

    /// The environment this registry belongs to
    pub fn environment(&self) -> &Environment {
        &self.env
    }

    /// File that holds an identity's record.
    pub fn path_for(&self, identity: &Identity) -> PathBuf {
        self.env
            .pubkeys_dir()
            .join(format!("{}.{}", identity.slug(), constants::PUBKEY_EXTENSION))
    }

    /// Register a recipient.
    ///
    /// Creates the environment if needed and overwrites any earlier record
    /// of the same identity.
    ///
    /// # Returns
    ///
    /// Path of the record file.
    pub fn register(&self, record: &PublicKeyRecord) -> Result<PathBuf> {
        self.env.ensure()?;

        let path = self.path_for(record.identity());
        fs::write(&path, record.to_text()?)?;

        debug!(
            environment = %self.env,
            identity = %record.identity(),
            path = %path.display(),
            "public key registered"
        );

        Ok(path)
    }

    /// All registered recipients, keyed by slug.
    ///
    /// A missing key directory is an empty registry.
    ///
    /// # Errors
    ///
    /// Returns `KeyError::InvalidFormat` naming the file if a record cannot
    /// be parsed.
    pub fn list(&self) -> Result<BTreeMap<Slug, PublicKeyRecord>> {
        let dir = self.env.pubkeys_dir();
        let mut records = BTreeMap::new();

        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(records),
            Err(e) => return Err(e.into()),
        };

        for entry in entries {
            let path = entry?.path();
            if !path.is_file()
                || path.extension().and_then(|e| e.to_str()) != Some(constants::PUBKEY_EXTENSION)
            {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            let text = fs::read_to_string(&path)?;
            let record = PublicKeyRecord::parse(&text).map_err(|e| {
                KeyError::InvalidFormat(format!("{}: {}", path.display(), e))
            })?;
            records.insert(stem.to_string(), record);
        }

        debug!(environment = %self.env, recipients = records.len(), "listed public keys");

        Ok(records)
    }

    /// Recipients as a slice-friendly vector, in slug order.
    pub fn recipients(&self) -> Result<Vec<PublicKeyRecord>> {
        Ok(self.list()?.into_values().collect())
    }

    /// Remove an identity's record.
    ///
    /// Existing ciphertexts stay readable by that identity until the
    /// environment is refreshed.
    ///
    /// # Returns
    ///
    /// `true` if a record was removed.
    pub fn remove(&self, identity: &Identity) -> Result<bool> {
        let path = self.path_for(identity);
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!(environment = %self.env, identity = %identity, "public key removed");
                Ok(true)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
