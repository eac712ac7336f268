//! Key configuration.
//!
//! Where the local private key and its passphrase come from. Built once by
//! the caller (the CLI fills it from flags and environment variables) and
//! handed to [`KeyStore`](crate::core::keystore::KeyStore); the core never
//! reads process-wide state.

use zeroize::Zeroizing;

/// Where the passphrase for the local private key comes from.
#[derive(Clone, Default)]
pub enum PassphraseSource {
    /// Ask the injected prompt when a passphrase is needed.
    #[default]
    Prompt,
    /// Use this value without asking.
    Inline(Zeroizing<String>),
}

impl std::fmt::Debug for PassphraseSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Prompt => f.write_str("Prompt"),
            Self::Inline(_) => f.write_str("Inline(<redacted>)"),
        }
    }
}

/// Key source configuration.
#[derive(Clone, Default)]
pub struct KeyConfig {
    /// Passphrase source
    pub passphrase: PassphraseSource,
    /// Armored private key supplied out of band, replacing the key file
    pub private_key: Option<Zeroizing<String>>,
}

impl KeyConfig {
    /// Create a configuration that prompts and uses the key file.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an inline passphrase.
    pub fn with_passphrase(mut self, passphrase: impl Into<String>) -> Self {
        self.passphrase = PassphraseSource::Inline(Zeroizing::new(passphrase.into()));
        self
    }

    /// Use an inline armored private key.
    pub fn with_private_key(mut self, armored: impl Into<String>) -> Self {
        self.private_key = Some(Zeroizing::new(armored.into()));
        self
    }

    /// Build from optional raw values, treating empty strings as unset.
    ///
    /// Mirrors how the `OPENPAAS_PASSPHRASE` / `OPENPAAS_PRIVATE_KEY`
    /// variables are usually cleared by exporting them empty.
    pub fn from_values(passphrase: Option<String>, private_key: Option<String>) -> Self {
        let mut config = Self::new();
        if let Some(passphrase) = passphrase.filter(|p| !p.is_empty()) {
            config = config.with_passphrase(passphrase);
        }
        if let Some(armored) = private_key.filter(|k| !k.trim().is_empty()) {
            config = config.with_private_key(armored);
        }
        config
    }

    /// Inline passphrase, if configured
    pub fn inline_passphrase(&self) -> Option<&Zeroizing<String>> {
        match &self.passphrase {
            PassphraseSource::Inline(p) => Some(p),
            PassphraseSource::Prompt => None,
        }
    }
}

impl std::fmt::Debug for KeyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyConfig")
            .field("passphrase", &self.passphrase)
            .field("private_key", &self.private_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
