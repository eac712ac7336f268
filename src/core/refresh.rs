//! Re-encryption to the current recipient set.
//!
//! Refreshing is how access changes take effect: after it runs, every
//! secret is readable by exactly the keys in the registry.
//!
//! Every secret is re-encrypted into a staging directory next to
//! `secrets/` first. Originals are replaced only once the whole batch is
//! staged, so a failure while encrypting or writing leaves the environment
//! as it was. The renames themselves are not atomic as a group.

use std::fs;

use tracing::{debug, info};

use crate::core::cipher::{Age, Cipher};
use crate::core::constants;
use crate::core::domain::PrivateKeyMaterial;
use crate::core::environment;
use crate::core::secrets::{write_atomic, SecretStore};
use crate::error::Result;

/// Outcome of a refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshSummary {
    /// Secrets re-encrypted
    pub secrets: usize,
    /// Recipients they are now encrypted to
    pub recipients: usize,
}

/// Re-encrypts an environment's secrets.
pub struct RefreshEngine<'a, C: Cipher = Age> {
    store: &'a SecretStore<C>,
}

impl<'a, C: Cipher> RefreshEngine<'a, C> {
    /// Engine for a secret store.
    pub fn new(store: &'a SecretStore<C>) -> Self {
        Self { store }
    }

    /// Re-encrypt every secret to the registry's current recipients.
    ///
    /// # Errors
    ///
    /// Returns `Error::Authorization` if `key` cannot decrypt every existing
    /// secret and `Error::NoRecipients` if the registry is empty; neither
    /// touches any file. I/O errors during the final renames can leave some
    /// secrets rotated and others not.
    pub fn run(&self, key: &PrivateKeyMaterial) -> Result<RefreshSummary> {
        let env = self.store.environment();
        let secrets = self.store.read_all(key)?;

        if secrets.is_empty() {
            let recipients = self.store.registry().list()?.len();
            debug!(environment = %env, "nothing to refresh");
            return Ok(RefreshSummary {
                secrets: 0,
                recipients,
            });
        }

        let recipients = self.store.recipients_for_write()?;

        let staging = tempfile::Builder::new()
            .prefix(constants::REFRESH_STAGING_PREFIX)
            .tempdir_in(env.root())?;
        debug!(path = %staging.path().display(), "staging re-encrypted secrets");

        for secret in &secrets {
            let ciphertext = self.store.cipher().encrypt(secret.value(), &recipients)?;
            write_atomic(staging.path(), secret.name(), &ciphertext)?;
        }

        let secrets_dir = env.secrets_dir();
        environment::create_dir(&secrets_dir)?;
        for secret in &secrets {
            fs::rename(
                staging.path().join(secret.name()),
                secrets_dir.join(secret.name()),
            )?;
            debug!(secret = secret.name(), "secret rotated");
        }

        let summary = RefreshSummary {
            secrets: secrets.len(),
            recipients: recipients.len(),
        };
        info!(
            environment = %env,
            secrets = summary.secrets,
            recipients = summary.recipients,
            "environment refreshed"
        );

        Ok(summary)
    }
}
