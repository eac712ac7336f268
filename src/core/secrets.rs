//! Secret storage.
//!
//! One armored ciphertext per secret under `<env>/secrets/<NAME>`, always
//! encrypted to every public key registered in the environment at write
//! time.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;
use zeroize::Zeroizing;

use crate::core::cipher::{Age, Cipher};
use crate::core::domain::{PrivateKeyMaterial, PublicKeyRecord, Secret};
use crate::core::environment::{self, Environment};
use crate::core::registry::PubKeyRegistry;
use crate::core::types::SecretName;
use crate::core::validation::{validate_key, validate_value};
use crate::error::{Error, Result, ValidationError};

/// Encrypted secrets of one environment.
#[derive(Debug)]
pub struct SecretStore<C: Cipher = Age> {
    registry: PubKeyRegistry,
    cipher: C,
}

impl SecretStore<Age> {
    /// Secret store using the age backend.
    pub fn new(env: Environment) -> Self {
        Self::with_cipher(env, Age::new())
    }
}

impl<C: Cipher> SecretStore<C> {
    /// Secret store using a specific cipher backend.
    pub fn with_cipher(env: Environment, cipher: C) -> Self {
        Self {
            registry: PubKeyRegistry::new(env),
            cipher,
        }
    }

    /// The environment
    pub fn environment(&self) -> &Environment {
        self.registry.environment()
    }

    /// The environment's public key registry
    pub fn registry(&self) -> &PubKeyRegistry {
        &self.registry
    }

    /// The cipher backend
    pub fn cipher(&self) -> &C {
        &self.cipher
    }

    /// File holding a secret's ciphertext.
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.environment().secrets_dir().join(name)
    }

    /// Encrypt a secret for every registered recipient and store it.
    ///
    /// Replaces any existing secret of the same name.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for an invalid name or empty value and
    /// `Error::NoRecipients` if no public key is registered; in both cases
    /// no file is written.
    pub fn write(&self, name: &str, plaintext: &str) -> Result<()> {
        validate_key(name)?;
        validate_value(name, plaintext)?;

        let recipients = self.recipients_for_write()?;
        let ciphertext = self.cipher.encrypt(plaintext, &recipients)?;

        let dir = self.environment().secrets_dir();
        environment::create_dir(&dir)?;
        write_atomic(&dir, name, &ciphertext)?;

        debug!(
            environment = %self.environment(),
            secret = name,
            recipients = recipients.len(),
            "secret written"
        );

        Ok(())
    }

    /// Decrypt one secret.
    ///
    /// # Errors
    ///
    /// Returns `Error::SecretNotFound` if there is no such secret and
    /// `Error::Authorization` if the key cannot decrypt it.
    pub fn read(&self, name: &str, key: &PrivateKeyMaterial) -> Result<Zeroizing<String>> {
        validate_file_name(name)?;
        if !self.path_for(name).is_file() {
            return Err(Error::SecretNotFound(name.to_string()));
        }

        let identity = self.cipher.unlock(key)?;
        self.decrypt_with(name, &identity)
    }

    /// Decrypt every secret, sorted by name.
    ///
    /// # Errors
    ///
    /// Returns `Error::Authorization` for the first secret the key cannot
    /// decrypt; no partial result is returned.
    pub fn read_all(&self, key: &PrivateKeyMaterial) -> Result<Vec<Secret>> {
        let names = self.names()?;
        if names.is_empty() {
            return Ok(Vec::new());
        }

        let identity = self.cipher.unlock(key)?;

        let mut secrets = Vec::with_capacity(names.len());
        for name in names {
            let value = self.decrypt_with(&name, &identity)?;
            secrets.push(Secret::new(name, value));
        }

        debug!(environment = %self.environment(), secrets = secrets.len(), "decrypted all");

        Ok(secrets)
    }

    /// Names of all stored secrets, sorted.
    ///
    /// Every regular file not starting with `.` is a secret, whatever its
    /// name, so that reads and refreshes cover files written by other tools.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidKey` for a file name that is not
    /// UTF-8.
    pub fn names(&self) -> Result<Vec<SecretName>> {
        let dir = self.environment().secrets_dir();
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let name = entry.file_name().into_string().map_err(|raw| {
                ValidationError::InvalidKey {
                    key: raw.to_string_lossy().into_owned(),
                    reason: "secret file name is not valid UTF-8".to_string(),
                }
            })?;
            if name.starts_with('.') {
                continue;
            }
            names.push(name);
        }

        names.sort();
        Ok(names)
    }

    /// Current recipients, refusing an empty set.
    pub(crate) fn recipients_for_write(&self) -> Result<Vec<PublicKeyRecord>> {
        let recipients = self.registry.recipients()?;
        if recipients.is_empty() {
            return Err(Error::NoRecipients {
                environment: self.environment().name().to_string(),
            });
        }
        Ok(recipients)
    }

    fn decrypt_with(&self, name: &str, identity: &C::Identity) -> Result<Zeroizing<String>> {
        let ciphertext = fs::read_to_string(self.path_for(name))?;

        self.cipher.decrypt(&ciphertext, identity).map_err(|e| {
            debug!(secret = name, error = %e, "decryption rejected");
            Error::Authorization {
                environment: self.environment().name().to_string(),
                secret: name.to_string(),
            }
        })
    }
}

/// Names accepted for reading: one visible path component.
fn validate_file_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ValidationError::EmptyKey.into());
    }
    if name.starts_with('.') || name.contains(['/', '\\', '\0']) {
        return Err(ValidationError::InvalidKey {
            key: name.to_string(),
            reason: "not a secret file name".to_string(),
        }
        .into());
    }
    Ok(())
}

/// Replace `dir/name` with `contents` via a temp file and rename.
pub(crate) fn write_atomic(dir: &Path, name: &str, contents: &str) -> Result<()> {
    let mut file = tempfile::NamedTempFile::new_in(dir)?;
    file.write_all(contents.as_bytes())?;
    file.as_file().sync_all()?;
    file.persist(dir.join(name)).map_err(|e| e.error)?;
    Ok(())
}
