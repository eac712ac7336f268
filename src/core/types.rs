//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// A secret name (e.g., DATABASE_URL, API_KEY).
///
/// Written secrets use environment variable names; stored files may
/// carry any file name.
pub type SecretName = String;

/// An age public key string (starts with "age1...").
pub type PublicKey = String;

/// A filesystem-safe identifier derived from a key owner's identity.
pub type Slug = String;
