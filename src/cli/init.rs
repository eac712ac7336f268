//! Init command.
//!
//! Creates the local private key on first use and registers its public key
//! in an environment.

use tracing::info;

use crate::cli::prompt::ArgsPrompt;
use crate::cli::{output, KeyOptions, Target};
use crate::core::registry::PubKeyRegistry;
use crate::error::Result;

/// Initialize secret management for an environment.
///
/// `owner` supplies name and email for non-interactive key generation.
pub fn execute(keys: &KeyOptions, target: &Target, owner: Option<(String, String)>) -> Result<()> {
    let env = target.environment()?;

    let mut store = keys.key_store()?;
    if let Some((name, email)) = owner {
        let passphrase = keys.config.inline_passphrase().cloned();
        store = store.with_prompt(ArgsPrompt::new(name, email, passphrase));
    }

    let (material, created) = store.ensure()?;
    let record = store.public_record(&material)?;

    let registry = PubKeyRegistry::new(env);
    let path = registry.register(&record)?;
    info!(identity = %record.identity(), environment = %registry.environment(), "initialized");

    if created {
        output::success(&format!(
            "private key created at {}",
            output::path(store.path().display())
        ));
    }
    output::success(&format!(
        "registered {} in {}",
        record.identity(),
        output::path(path.display())
    ));

    if created {
        print_custody_guidance();
    }

    Ok(())
}

fn print_custody_guidance() {
    output::blank();
    output::warn("keep your private key and passphrase secure from prying eyes and backed up");
    output::dimmed(
        "A lost private key & passphrase cannot be recovered. If no user remains with access \
         to at least one functioning key, secrets data will be lost.",
    );
    output::blank();
    output::dimmed(
        "Keys & passphrases should not be shared. Each user requiring access should create their \
         own with `secrets init`, commit their public key to the repository, and ask an existing \
         user to re-encrypt all secrets:",
    );
    output::kv("run", output::cmd("secrets refresh"));
}
