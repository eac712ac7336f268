//! Env command.
//!
//! Decrypts every secret of an environment into a sourceable file.

use std::path::Path;

use tracing::info;

use crate::cli::{output, KeyOptions, Target};
use crate::core::env::write_exports;
use crate::error::Result;

/// Write `export NAME=value` lines for all secrets to `output_file`.
pub fn execute(keys: &KeyOptions, target: &Target, output_file: &Path) -> Result<()> {
    let store = keys.secret_store(target)?;
    let key = keys.key_store()?.load()?;

    let secrets = store.read_all(&key)?;
    let count = write_exports(output_file, &secrets)?;
    info!(environment = %store.environment(), secrets = count, "exports written");

    output::success(&format!(
        "wrote {} secret{} to {}",
        count,
        if count == 1 { "" } else { "s" },
        output::path(output_file.display())
    ));

    Ok(())
}
