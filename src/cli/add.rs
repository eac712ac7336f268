//! Add command.
//!
//! Encrypts a secret for every registered public key. The value is read
//! with hidden input, or from stdin when piped.

use std::io::{self, IsTerminal, Read};

use dialoguer::Password;
use tracing::info;
use zeroize::Zeroizing;

use crate::cli::{output, KeyOptions, Target};
use crate::core::validation::validate_key;
use crate::error::{Result, ValidationError};

/// Add or replace a secret.
pub fn execute(keys: &KeyOptions, target: &Target, name: &str) -> Result<()> {
    validate_key(name)?;
    let store = keys.secret_store(target)?;

    let value = if !io::stdin().is_terminal() {
        let mut input = Zeroizing::new(String::new());
        io::stdin().read_to_string(&mut input)?;
        Zeroizing::new(input.trim_end_matches(['\r', '\n']).to_string())
    } else {
        Zeroizing::new(
            Password::new()
                .with_prompt(format!("Value for {}", output::key(name)))
                .interact()?,
        )
    };

    if value.is_empty() {
        return Err(ValidationError::EmptyValue(name.to_string()).into());
    }

    let replaced = store.path_for(name).exists();
    store.write(name, &value)?;
    info!(secret = name, environment = %store.environment(), replaced, "secret added");

    let recipients = store.registry().list()?.len();
    output::success(&format!(
        "{} {} for {} recipient{}",
        if replaced { "replaced" } else { "added" },
        output::key(name),
        recipients,
        if recipients == 1 { "" } else { "s" }
    ));

    Ok(())
}
