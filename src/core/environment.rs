//! Environment layout.
//!
//! An environment is one directory under a base directory:
//!
//! ```text
//! <base>/<env>/pubkeys/<slug>.asc
//! <base>/<env>/secrets/<NAME>
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::constants;
use crate::core::validation;
use crate::error::Result;

/// A named environment rooted under a base directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    name: String,
    root: PathBuf,
}

impl Environment {
    /// Locate an environment. Does not touch the filesystem.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEnvironment` if the name is empty or
    /// would escape the base directory.
    pub fn new(base: impl AsRef<Path>, name: &str) -> Result<Self> {
        validation::validate_environment(name)?;

        Ok(Self {
            name: name.to_string(),
            root: base.as_ref().join(name),
        })
    }

    /// Environment name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// `<base>/<env>`
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<base>/<env>/pubkeys`
    pub fn pubkeys_dir(&self) -> PathBuf {
        self.root.join(constants::PUBKEYS_DIR)
    }

    /// `<base>/<env>/secrets`
    pub fn secrets_dir(&self) -> PathBuf {
        self.root.join(constants::SECRETS_DIR)
    }

    /// Whether the environment directory exists.
    pub fn exists(&self) -> bool {
        self.root.is_dir()
    }

    /// Create the environment's directories if missing.
    pub fn ensure(&self) -> Result<()> {
        create_dir(&self.pubkeys_dir())?;
        create_dir(&self.secrets_dir())?;
        debug!(environment = %self.name, root = %self.root.display(), "environment ready");
        Ok(())
    }
}

pub(crate) fn create_dir(path: &Path) -> Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(constants::ENV_DIR_MODE);
    }
    builder.create(path)?;
    Ok(())
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
