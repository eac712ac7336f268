//! Shell export rendering.
//!
//! Turns decrypted secrets into `export NAME=value` lines that can be
//! sourced by a shell or direnv.

use std::fs;
use std::io::Write;
use std::path::Path;

use zeroize::Zeroizing;

use crate::core::domain::Secret;
use crate::error::Result;

/// Render secrets as `export NAME=value` lines, in the given order.
///
/// Values that are not shell-safe are single-quoted.
pub fn render_exports(secrets: &[Secret]) -> Zeroizing<String> {
    let mut output = Zeroizing::new(String::new());

    for secret in secrets {
        output.push_str("export ");
        output.push_str(secret.name());
        output.push('=');
        if needs_quotes(secret.value()) {
            output.push_str(&quote(secret.value()));
        } else {
            output.push_str(secret.value());
        }
        output.push('\n');
    }

    output
}

/// Write rendered exports to a file, replacing it.
///
/// The file is owner-only on Unix, including a pre-existing one.
///
/// # Returns
///
/// Number of secrets written.
pub fn write_exports(path: &Path, secrets: &[Secret]) -> Result<usize> {
    let rendered = render_exports(secrets);

    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(fs::Permissions::from_mode(0o600))?;
    }
    file.write_all(rendered.as_bytes())?;

    Ok(secrets.len())
}

fn needs_quotes(value: &str) -> bool {
    !value.chars().all(|ch| {
        ch.is_ascii_alphanumeric() || matches!(ch, '_' | '-' | '.' | '/' | ':' | '@' | '+' | ',' | '%')
    })
}

fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "'\\''"))
}
