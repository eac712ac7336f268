//! Refresh command.
//!
//! Re-encrypts an environment to the public keys currently registered.

use crate::cli::{output, KeyOptions, Target};
use crate::core::refresh::RefreshEngine;
use crate::error::Result;

/// Re-encrypt all secrets of an environment.
pub fn execute(keys: &KeyOptions, target: &Target) -> Result<()> {
    let store = keys.secret_store(target)?;
    let key = keys.key_store()?.load()?;

    let summary = RefreshEngine::new(&store).run(&key)?;

    if summary.secrets == 0 {
        output::dimmed("no secrets to refresh");
    } else {
        output::success(&format!(
            "refreshed {} secret{} for {} recipient{}",
            summary.secrets,
            if summary.secrets == 1 { "" } else { "s" },
            summary.recipients,
            if summary.recipients == 1 { "" } else { "s" }
        ));
    }

    Ok(())
}
