//! Error types.
//!
//! Every fallible operation in the crate returns [`Result`]. Errors are
//! grouped by the component that raises them and surfaced to the caller
//! unchanged; nothing here retries or recovers.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Key(#[from] KeyError),

    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("no public keys registered in environment '{environment}'")]
    NoRecipients { environment: String },

    #[error("not authorized to decrypt '{secret}' in environment '{environment}'")]
    Authorization {
        environment: String,
        secret: String,
    },

    #[error("secret not found: {0}")]
    SecretNotFound(String),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// Local private key errors.
#[derive(Error, Debug)]
pub enum KeyError {
    #[error("no private key found at {}", .0.display())]
    NotFound(PathBuf),

    #[error("private key could not be unlocked with the supplied passphrase")]
    Passphrase,

    #[error("a passphrase is required to unlock the private key")]
    PassphraseRequired,

    #[error("invalid key format: {0}")]
    InvalidFormat(String),

    #[error("key generation failed: {0}")]
    GenerationFailed(String),

    #[error("unable to determine home directory")]
    NoHomeDir,

    #[error("failed to read key: {0}")]
    ReadFailed(#[source] std::io::Error),

    #[error("failed to write key: {0}")]
    WriteFailed(#[source] std::io::Error),
}

/// Encryption backend errors.
#[derive(Error, Debug)]
pub enum CipherError {
    #[error("encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("decryption failed: {0}")]
    DecryptionFailed(String),

    #[error("armor failed: {0}")]
    ArmorFailed(String),

    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),
}

/// Input validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("secret name cannot be empty")]
    EmptyKey,

    #[error("invalid secret name '{key}': {reason}")]
    InvalidKey { key: String, reason: String },

    #[error("value for '{0}' cannot be empty")]
    EmptyValue(String),

    #[error("invalid environment name '{name}': {reason}")]
    InvalidEnvironment { name: String, reason: String },

    #[error("invalid identity: {0}")]
    InvalidIdentity(String),

    #[error("passphrase cannot be empty")]
    EmptyPassphrase,

    #[error("insecure permissions on {path}: expected {expected}, found {actual}")]
    InvalidPermissions {
        path: String,
        expected: String,
        actual: String,
    },
}

impl Error {
    /// Whether this error means the local key is missing.
    pub fn is_key_not_found(&self) -> bool {
        matches!(self, Error::Key(KeyError::NotFound(_)))
    }

    /// Whether this error means the local key is not a recipient.
    pub fn is_authorization(&self) -> bool {
        matches!(self, Error::Authorization { .. })
    }

    /// Whether this error is the zero-recipient guard.
    pub fn is_no_recipients(&self) -> bool {
        matches!(self, Error::NoRecipients { .. })
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
