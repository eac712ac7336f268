//! Terminal and argument-backed prompts for the key store.

use dialoguer::{Input, Password};
use zeroize::Zeroizing;

use crate::core::domain::KeySettings;
use crate::core::keystore::Prompt;
use crate::core::validation::validate_identity;
use crate::error::{KeyError, Result};

/// Interactive prompts on the controlling terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn key_settings(&self) -> Result<KeySettings> {
        let name: String = Input::new()
            .with_prompt("Your full name")
            .default(whoami::realname())
            .interact_text()?;

        let email: String = Input::new()
            .with_prompt("Your email")
            .validate_with(|input: &String| -> std::result::Result<(), String> {
                validate_identity(name.trim(), input.trim()).map_err(|e| e.to_string())
            })
            .interact_text()?;

        let passphrase = Zeroizing::new(
            Password::new()
                .with_prompt("Passphrase for your private key")
                .with_confirmation("Confirm passphrase", "passphrases do not match")
                .interact()?,
        );

        KeySettings::new(&name, &email, passphrase)
    }

    fn passphrase(&self) -> Result<Zeroizing<String>> {
        Ok(Zeroizing::new(
            Password::new()
                .with_prompt("Passphrase for your private key")
                .interact()?,
        ))
    }
}

/// Answers taken from command-line flags, for scripted `init`.
#[derive(Debug, Clone)]
pub struct ArgsPrompt {
    name: String,
    email: String,
    passphrase: Option<Zeroizing<String>>,
}

impl ArgsPrompt {
    pub fn new(name: String, email: String, passphrase: Option<Zeroizing<String>>) -> Self {
        Self {
            name,
            email,
            passphrase,
        }
    }
}

impl Prompt for ArgsPrompt {
    fn key_settings(&self) -> Result<KeySettings> {
        KeySettings::new(&self.name, &self.email, self.passphrase()?)
    }

    fn passphrase(&self) -> Result<Zeroizing<String>> {
        self.passphrase
            .clone()
            .ok_or_else(|| KeyError::PassphraseRequired.into())
    }
}
