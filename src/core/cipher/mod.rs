//! Cryptographic capability.
//!
//! The rest of the crate never touches key bytes or ciphertext formats
//! directly. It goes through two traits:
//!
//! - [`KeyProvider`]: creates and inspects private key material.
//! - [`Cipher`]: encrypts to a set of recipients and decrypts with an
//!   unlocked private key.
//!
//! [`Age`] implements both using x25519 recipients, an scrypt-locked
//! private key and ASCII armor.
//!
//! ## Adding a New Backend
//!
//! 1. Implement `KeyProvider` and `Cipher`
//! 2. Add the implementation in a new file
//! 3. Re-export from this module

use zeroize::Zeroizing;

use crate::core::domain::{KeySettings, PrivateKeyMaterial, PublicKeyRecord};
use crate::error::Result;

mod age;

pub use age::{parse_recipient, Age};

/// Private key management half of the capability.
pub trait KeyProvider {
    /// Generate a new key pair for an identity.
    ///
    /// # Returns
    ///
    /// The armored private key, locked with the settings' passphrase. The
    /// public half can be recovered with [`KeyProvider::load_key`].
    ///
    /// # Errors
    ///
    /// Returns `KeyError::GenerationFailed` if the key cannot be produced.
    fn generate_key_pair(&self, settings: &KeySettings) -> Result<Zeroizing<String>>;

    /// Parse armored private key text and return its public half.
    ///
    /// Does not need the passphrase.
    ///
    /// # Errors
    ///
    /// Returns `KeyError::InvalidFormat` on malformed input.
    fn load_key(&self, armored: &str) -> Result<PublicKeyRecord>;

    /// Check that the material's passphrase unlocks it.
    ///
    /// # Errors
    ///
    /// Returns `KeyError::Passphrase` if it does not, or
    /// `KeyError::PassphraseRequired` if none is set.
    fn verify_passphrase(&self, key: &PrivateKeyMaterial) -> Result<()>;
}

/// Encryption half of the capability.
pub trait Cipher {
    /// Unlocked private key, ready for decryption.
    type Identity;

    /// Unlock private key material with its passphrase.
    ///
    /// # Errors
    ///
    /// Returns `KeyError::Passphrase` or `KeyError::PassphraseRequired` if
    /// the key cannot be unlocked, `KeyError::InvalidFormat` if it is
    /// malformed.
    fn unlock(&self, key: &PrivateKeyMaterial) -> Result<Self::Identity>;

    /// Encrypt plaintext so that every recipient can decrypt it.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::InvalidPublicKey` for an unusable recipient key
    /// and `CipherError::EncryptionFailed` for everything else.
    fn encrypt(&self, plaintext: &str, recipients: &[PublicKeyRecord]) -> Result<String>;

    /// Decrypt armored ciphertext.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::DecryptionFailed` when the identity is not a
    /// recipient or the data is corrupted.
    fn decrypt(&self, encrypted: &str, identity: &Self::Identity) -> Result<Zeroizing<String>>;
}
