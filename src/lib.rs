//! openpaas-secrets - per-environment team secrets.
//!
//! Every secret is encrypted to all public keys registered for its
//! environment. Access is granted or revoked by adding or removing
//! public keys and re-encrypting with a refresh.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── init          # Create the private key, register the public key
//! │   ├── add           # Encrypt one secret
//! │   ├── env           # Export all secrets to a file
//! │   ├── refresh       # Re-encrypt to the current recipients
//! │   ├── prompt        # Terminal prompts
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── cipher/       # KeyProvider and Cipher traits
//!     │   └── age       # age implementation
//!     ├── config        # Passphrase and inline key overrides
//!     ├── domain/       # Identity, key material, records, secrets
//!     ├── environment   # On-disk environment layout
//!     ├── keystore      # ~/.openpaas/private-key.asc
//!     ├── registry      # <env>/pubkeys
//!     ├── secrets       # <env>/secrets
//!     ├── refresh       # Staged re-encryption
//!     ├── env           # `export NAME=value` rendering
//!     └── slug          # Identity slugs and random tokens
//! ```
//!
//! # Layout on disk
//!
//! ```text
//! <baseDir>/<environment>/pubkeys/<slug>.asc
//! <baseDir>/<environment>/secrets/<NAME>
//! $HOME/.openpaas/private-key.asc
//! ```

pub mod cli;
pub mod core;
pub mod error;
