//! Constants used throughout the secrets tool.
//!
//! Centralizes file names and directory layout.

/// Per-user directory relative to HOME (~/.openpaas).
pub const KEY_DIR: &str = ".openpaas";

/// Private key file name inside [`KEY_DIR`].
pub const PRIVATE_KEY_FILE: &str = "private-key.asc";

/// Public key directory inside an environment.
pub const PUBKEYS_DIR: &str = "pubkeys";

/// Secret directory inside an environment.
pub const SECRETS_DIR: &str = "secrets";

/// Extension of public key records.
pub const PUBKEY_EXTENSION: &str = "asc";

/// Prefix of the staging directory used while refreshing.
pub const REFRESH_STAGING_PREFIX: &str = ".refresh-";

/// Mode for private key files.
#[cfg(unix)]
pub const PRIVATE_KEY_MODE: u32 = 0o600;

/// Mode for the private key directory.
#[cfg(unix)]
pub const KEY_DIR_MODE: u32 = 0o700;

/// Mode for environment directories.
#[cfg(unix)]
pub const ENV_DIR_MODE: u32 = 0o750;
