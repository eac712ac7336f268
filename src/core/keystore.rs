//! Local private key storage.
//!
//! Manages the one private key a user holds, at
//! `~/.openpaas/private-key.asc`, or an inline override supplied through
//! [`KeyConfig`].

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use zeroize::Zeroizing;

use crate::core::cipher::{Age, KeyProvider};
use crate::core::config::KeyConfig;
use crate::core::constants;
use crate::core::domain::{KeySettings, PrivateKeyMaterial, PublicKeyRecord};
use crate::error::{KeyError, Result};

/// Source of user input needed by the key store.
///
/// The CLI implements this with terminal prompts; tests inject fixed values.
pub trait Prompt {
    /// Identity and passphrase for a new key pair.
    fn key_settings(&self) -> Result<KeySettings>;

    /// Passphrase for an existing key.
    fn passphrase(&self) -> Result<Zeroizing<String>>;
}

/// The local user's private key.
pub struct KeyStore {
    path: PathBuf,
    config: KeyConfig,
    provider: Box<dyn KeyProvider>,
    prompt: Option<Box<dyn Prompt>>,
}

impl std::fmt::Debug for KeyStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyStore")
            .field("path", &self.path)
            .field("config", &self.config)
            .field("prompt", &self.prompt.is_some())
            .finish()
    }
}

impl KeyStore {
    /// Key store rooted at a home directory, using the age backend and no
    /// prompt.
    pub fn new(home: &Path, config: KeyConfig) -> Self {
        Self {
            path: home
                .join(constants::KEY_DIR)
                .join(constants::PRIVATE_KEY_FILE),
            config,
            provider: Box::new(Age::new()),
            prompt: None,
        }
    }

    /// Key store rooted at the current user's home directory.
    ///
    /// # Errors
    ///
    /// Returns `KeyError::NoHomeDir` if the home directory is unknown.
    pub fn for_current_user(config: KeyConfig) -> Result<Self> {
        let home = dirs::home_dir().ok_or(KeyError::NoHomeDir)?;
        Ok(Self::new(&home, config))
    }

    /// Replace the key provider.
    pub fn with_provider(mut self, provider: impl KeyProvider + 'static) -> Self {
        self.provider = Box::new(provider);
        self
    }

    /// Enable prompting.
    pub fn with_prompt(mut self, prompt: impl Prompt + 'static) -> Self {
        self.prompt = Some(Box::new(prompt));
        self
    }

    /// Private key file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Return the local key, generating one if none exists.
    ///
    /// # Returns
    ///
    /// The key material and whether it was created by this call. An inline
    /// override or an existing file is returned untouched with `false`.
    ///
    /// # Errors
    ///
    /// Returns `KeyError::NotFound` if a key would have to be generated but
    /// no prompt is available, `KeyError::InvalidFormat` if the existing key
    /// is malformed, and `KeyError::Passphrase` if a configured inline
    /// passphrase does not unlock it.
    pub fn ensure(&self) -> Result<(PrivateKeyMaterial, bool)> {
        if let Some(material) = self.existing()? {
            if material.passphrase().is_some() {
                self.provider.verify_passphrase(&material)?;
            }
            return Ok((material, false));
        }

        let prompt = self
            .prompt
            .as_deref()
            .ok_or_else(|| KeyError::NotFound(self.path.clone()))?;

        let settings = prompt.key_settings()?;
        debug!(identity = %settings.identity(), "generating private key");

        let armored = self.provider.generate_key_pair(&settings)?;
        self.persist(&armored)?;

        info!(path = %self.path.display(), "private key created");

        Ok((
            PrivateKeyMaterial::new(armored.as_str(), Some(settings.into_passphrase())),
            true,
        ))
    }

    /// Return the local key without ever generating one.
    ///
    /// Resolves the passphrase from the inline configuration, else from the
    /// prompt. Without either the material carries no passphrase and
    /// unlocking it later fails with `KeyError::PassphraseRequired`.
    ///
    /// # Errors
    ///
    /// Returns `KeyError::NotFound` if there is no inline key and no key
    /// file.
    pub fn load(&self) -> Result<PrivateKeyMaterial> {
        let material = self
            .existing()?
            .ok_or_else(|| KeyError::NotFound(self.path.clone()))?;

        if material.passphrase().is_some() {
            return Ok(material);
        }

        match self.prompt.as_deref() {
            Some(prompt) => Ok(material.with_passphrase(Some(prompt.passphrase()?))),
            None => Ok(material),
        }
    }

    /// Public half of key material.
    pub fn public_record(&self, material: &PrivateKeyMaterial) -> Result<PublicKeyRecord> {
        self.provider.load_key(material.armored())
    }

    fn existing(&self) -> Result<Option<PrivateKeyMaterial>> {
        let armored = if let Some(inline) = &self.config.private_key {
            debug!("using inline private key");
            Zeroizing::new(inline.as_str().to_owned())
        } else if self.path.exists() {
            debug!(path = %self.path.display(), "loading private key");
            self.warn_on_permissions();
            Zeroizing::new(fs::read_to_string(&self.path).map_err(KeyError::ReadFailed)?)
        } else {
            return Ok(None);
        };

        self.provider.load_key(&armored)?;

        Ok(Some(PrivateKeyMaterial::new(
            armored.as_str(),
            self.config.inline_passphrase().cloned(),
        )))
    }

    fn persist(&self, armored: &str) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            let mut builder = fs::DirBuilder::new();
            builder.recursive(true);
            #[cfg(unix)]
            {
                use std::os::unix::fs::DirBuilderExt;
                builder.mode(constants::KEY_DIR_MODE);
            }
            builder.create(dir).map_err(KeyError::WriteFailed)?;
        }

        let mut options = fs::OpenOptions::new();
        options.write(true).create_new(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(constants::PRIVATE_KEY_MODE);
        }

        let mut file = options.open(&self.path).map_err(KeyError::WriteFailed)?;
        file.write_all(armored.as_bytes())
            .map_err(KeyError::WriteFailed)?;
        file.sync_all().map_err(KeyError::WriteFailed)?;

        // Restrict permissions on key file regardless of umask (Unix only)
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(
                &self.path,
                fs::Permissions::from_mode(constants::PRIVATE_KEY_MODE),
            )
            .map_err(KeyError::WriteFailed)?;
        }

        Ok(())
    }

    fn warn_on_permissions(&self) {
        #[cfg(unix)]
        {
            if let Err(e) = crate::core::validation::validate_file_permissions(
                &self.path,
                constants::PRIVATE_KEY_MODE,
            ) {
                tracing::warn!(path = %self.path.display(), "{}", e);
            }
        }
    }
}
