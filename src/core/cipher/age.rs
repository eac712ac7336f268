//! Age encryption backend implementation.
//!
//! Secrets are age files for x25519 recipients with ASCII armor. The private
//! key file is a small TOML document: the owner's identity and public key in
//! the clear, and the x25519 secret key locked with an scrypt passphrase
//! recipient.

use std::io::{Read, Write};
use std::iter;

use ::age::armor::{ArmoredReader, ArmoredWriter, Format};
use ::age::secrecy::{ExposeSecret, SecretString};
use ::age::{scrypt, x25519};
use serde::{Deserialize, Serialize};
use tracing::trace;
use zeroize::Zeroizing;

use super::{Cipher, KeyProvider};
use crate::core::domain::{Identity, KeySettings, PrivateKeyMaterial, PublicKeyRecord};
use crate::error::{CipherError, KeyError, Result};

/// Age-based cryptographic backend using x25519 keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct Age {
    work_factor: Option<u8>,
}

impl Age {
    /// Backend with age's calibrated scrypt work factor.
    pub const fn new() -> Self {
        Self { work_factor: None }
    }

    /// Backend that locks new private keys with scrypt work factor `2^log_n`.
    ///
    /// Lower values unlock faster and are only meant for tests and benches.
    /// `log_n` must be between 1 and 63.
    pub const fn with_work_factor(log_n: u8) -> Self {
        Self {
            work_factor: Some(log_n),
        }
    }
}

/// On-disk layout of `private-key.asc`.
#[derive(Serialize, Deserialize)]
struct KeyFile {
    name: String,
    email: String,
    public_key: String,
    created: String,
    secret_key: String,
}

impl KeyFile {
    fn parse(armored: &str) -> Result<Self> {
        toml::from_str(armored)
            .map_err(|e| KeyError::InvalidFormat(format!("private key: {}", e)).into())
    }

    fn record(&self) -> Result<PublicKeyRecord> {
        let identity = Identity::new(&self.name, &self.email)
            .map_err(|e| KeyError::InvalidFormat(e.to_string()))?;
        parse_recipient(&self.public_key)
            .map_err(|_| KeyError::InvalidFormat("private key has an invalid public key".into()))?;

        Ok(PublicKeyRecord::new(identity, self.public_key.clone()))
    }
}

fn armor_encrypt<'a>(
    plaintext: &[u8],
    recipients: impl Iterator<Item = &'a dyn ::age::Recipient>,
) -> Result<String> {
    let encryptor = ::age::Encryptor::with_recipients(recipients)
        .map_err(|e| CipherError::EncryptionFailed(format!("{}", e)))?;

    let mut encrypted = Vec::new();
    let mut writer = encryptor
        .wrap_output(ArmoredWriter::wrap_output(
            &mut encrypted,
            Format::AsciiArmor,
        )?)
        .map_err(|e| CipherError::EncryptionFailed(format!("{}", e)))?;

    writer.write_all(plaintext)?;
    let armored = writer
        .finish()
        .map_err(|e| CipherError::EncryptionFailed(format!("{}", e)))?;
    armored
        .finish()
        .map_err(|e| CipherError::ArmorFailed(format!("{}", e)))?;

    String::from_utf8(encrypted)
        .map_err(|e| CipherError::EncryptionFailed(format!("UTF-8 error: {}", e)).into())
}

impl KeyProvider for Age {
    fn generate_key_pair(&self, settings: &KeySettings) -> Result<Zeroizing<String>> {
        let inner = x25519::Identity::generate();
        let public_key = inner.to_public().to_string();

        let mut lock = scrypt::Recipient::new(SecretString::from(settings.passphrase().to_string()));
        if let Some(log_n) = self.work_factor {
            lock.set_work_factor(log_n);
        }

        let secret = inner.to_string();
        let secret_key = armor_encrypt(
            secret.expose_secret().as_bytes(),
            iter::once(&lock as &dyn ::age::Recipient),
        )
        .map_err(|e| KeyError::GenerationFailed(e.to_string()))?;

        let file = KeyFile {
            name: settings.identity().name().to_string(),
            email: settings.identity().email().to_string(),
            public_key,
            created: chrono::Utc::now().to_rfc3339(),
            secret_key,
        };

        Ok(Zeroizing::new(toml::to_string(&file)?))
    }

    fn load_key(&self, armored: &str) -> Result<PublicKeyRecord> {
        KeyFile::parse(armored)?.record()
    }

    fn verify_passphrase(&self, key: &PrivateKeyMaterial) -> Result<()> {
        self.unlock(key).map(|_| ())
    }
}

impl Cipher for Age {
    type Identity = x25519::Identity;

    fn unlock(&self, key: &PrivateKeyMaterial) -> Result<x25519::Identity> {
        let file = KeyFile::parse(key.armored())?;
        let passphrase = key.passphrase().ok_or(KeyError::PassphraseRequired)?;

        let decryptor = ::age::Decryptor::new(ArmoredReader::new(file.secret_key.as_bytes()))
            .map_err(|e| KeyError::InvalidFormat(format!("locked secret key: {}", e)))?;
        if !decryptor.is_scrypt() {
            return Err(KeyError::InvalidFormat("secret key is not passphrase-locked".into()).into());
        }

        let unlock = scrypt::Identity::new(SecretString::from(passphrase.to_string()));
        let mut reader = decryptor
            .decrypt(iter::once(&unlock as &dyn ::age::Identity))
            .map_err(|_| KeyError::Passphrase)?;

        let mut bytes = Zeroizing::new(Vec::new());
        reader
            .read_to_end(&mut bytes)
            .map_err(|_| KeyError::Passphrase)?;

        let text = std::str::from_utf8(&bytes)
            .map_err(|_| KeyError::InvalidFormat("secret key is not UTF-8".into()))?;
        let inner: x25519::Identity = text
            .trim()
            .parse()
            .map_err(|e: &str| KeyError::InvalidFormat(e.to_string()))?;

        if inner.to_public().to_string() != file.public_key {
            return Err(KeyError::InvalidFormat(
                "secret key does not match its public key".to_string(),
            )
            .into());
        }

        Ok(inner)
    }

    fn encrypt(&self, plaintext: &str, recipients: &[PublicKeyRecord]) -> Result<String> {
        trace!(
            recipients = recipients.len(),
            plaintext_len = plaintext.len(),
            "encrypting"
        );

        let parsed = recipients
            .iter()
            .map(|r| parse_recipient(r.public_key()))
            .collect::<Result<Vec<_>>>()?;

        let encrypted = armor_encrypt(
            plaintext.as_bytes(),
            parsed.iter().map(|r| r as &dyn ::age::Recipient),
        )?;

        trace!(ciphertext_len = encrypted.len(), "encrypted");

        Ok(encrypted)
    }

    fn decrypt(&self, encrypted: &str, identity: &x25519::Identity) -> Result<Zeroizing<String>> {
        trace!(ciphertext_len = encrypted.len(), "decrypting");

        let decryptor = ::age::Decryptor::new(ArmoredReader::new(encrypted.as_bytes()))
            .map_err(|e| CipherError::DecryptionFailed(format!("{}", e)))?;
        if decryptor.is_scrypt() {
            return Err(
                CipherError::DecryptionFailed("ciphertext is passphrase-locked".into()).into(),
            );
        }

        let mut reader = decryptor
            .decrypt(iter::once(identity as &dyn ::age::Identity))
            .map_err(|e| CipherError::DecryptionFailed(format!("{}", e)))?;

        let mut decrypted = Vec::new();
        reader
            .read_to_end(&mut decrypted)
            .map_err(|e| CipherError::DecryptionFailed(format!("{}", e)))?;

        trace!(plaintext_len = decrypted.len(), "decrypted");

        String::from_utf8(decrypted)
            .map(Zeroizing::new)
            .map_err(|e| CipherError::DecryptionFailed(format!("UTF-8 error: {}", e)).into())
    }
}

/// Parse a public key string into an age recipient
///
/// # Errors
///
/// Returns `CipherError::InvalidPublicKey` if the key format is invalid.
pub fn parse_recipient(key: &str) -> Result<x25519::Recipient> {
    key.trim()
        .parse::<x25519::Recipient>()
        .map_err(|_| CipherError::InvalidPublicKey(key.to_string()).into())
}
