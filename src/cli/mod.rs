//! Command-line interface.

pub mod add;
pub mod completions;
pub mod env;
pub mod init;
pub mod output;
pub mod prompt;
pub mod refresh;

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::core::cipher::Age;
use crate::core::config::KeyConfig;
use crate::core::environment::Environment;
use crate::core::keystore::KeyStore;
use crate::core::secrets::SecretStore;
use crate::error::Result;

/// secrets - manage encrypted secrets for your environments.
#[derive(Parser, Debug)]
#[command(
    name = "secrets",
    about = "Manage encrypted secrets for your environments",
    long_about = "secrets - A tool to manage secrets for your environment.\n\n\
                  Secrets are encrypted to every public key registered in an environment. \
                  Commit the base directory; grant or revoke access by adding or removing \
                  public keys and running `secrets refresh`.",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Passphrase of the private key (skips the prompt)
    #[arg(
        long,
        global = true,
        env = "OPENPAAS_PASSPHRASE",
        hide_env_values = true
    )]
    pub passphrase: Option<String>,

    /// Armored private key to use instead of ~/.openpaas/private-key.asc
    #[arg(
        long,
        global = true,
        env = "OPENPAAS_PRIVATE_KEY",
        hide_env_values = true,
        value_name = "ARMORED"
    )]
    pub private_key: Option<String>,

    /// scrypt work factor (log2) for newly generated private keys
    #[arg(
        long,
        global = true,
        hide = true,
        env = "OPENPAAS_SCRYPT_WORK_FACTOR",
        value_parser = clap::value_parser!(u8).range(1..=30)
    )]
    pub work_factor: Option<u8>,
}

/// Environment selection shared by every command.
#[derive(Args, Debug, Clone)]
pub struct Target {
    /// Base directory for secrets
    #[arg(short = 'b', long = "baseDir", visible_alias = "base-dir", value_name = "DIR")]
    pub base_dir: PathBuf,

    /// Environment name
    #[arg(short, long)]
    pub environment: String,
}

impl Target {
    /// Resolve to an environment.
    pub fn environment(&self) -> Result<Environment> {
        Environment::new(&self.base_dir, &self.environment)
    }
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize secret management for an environment
    ///
    /// Creates a private key in ~/.openpaas if you do not have one yet and
    /// registers its public key in the environment.
    Init {
        #[command(flatten)]
        target: Target,

        /// Your full name, for non-interactive key generation
        #[arg(long, requires = "owner_email")]
        owner_name: Option<String>,

        /// Your email, for non-interactive key generation
        #[arg(long, requires = "owner_name")]
        owner_email: Option<String>,
    },

    /// Add a new secret, or replace an existing one
    ///
    /// The value is read from a hidden prompt, or from stdin when piped.
    Add {
        #[command(flatten)]
        target: Target,

        /// Name of secret
        #[arg(short, long)]
        name: String,
    },

    /// Dump all secrets as `export KEY=value` into the output file
    Env {
        #[command(flatten)]
        target: Target,

        /// Name of output file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Re-encrypt all secrets with the currently registered public keys
    ///
    /// Run after public keys are added or removed.
    Refresh {
        #[command(flatten)]
        target: Target,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Command {
    /// Environment the command operates on, if any.
    pub fn target(&self) -> Option<&Target> {
        match self {
            Command::Init { target, .. }
            | Command::Add { target, .. }
            | Command::Env { target, .. }
            | Command::Refresh { target } => Some(target),
            Command::Completions { .. } => None,
        }
    }
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Options shared by the commands that touch the private key.
#[derive(Debug, Clone)]
pub struct KeyOptions {
    pub config: KeyConfig,
    pub work_factor: Option<u8>,
}

impl KeyOptions {
    /// Backend for this invocation.
    pub fn cipher(&self) -> Age {
        match self.work_factor {
            Some(log_n) => Age::with_work_factor(log_n),
            None => Age::new(),
        }
    }

    /// Key store for the current user, prompting only on a terminal.
    pub fn key_store(&self) -> Result<KeyStore> {
        let store = KeyStore::for_current_user(self.config.clone())?.with_provider(self.cipher());
        if io::stdin().is_terminal() {
            Ok(store.with_prompt(prompt::TerminalPrompt))
        } else {
            Ok(store)
        }
    }

    /// Secret store for a target.
    pub fn secret_store(&self, target: &Target) -> Result<SecretStore> {
        Ok(SecretStore::with_cipher(target.environment()?, self.cipher()))
    }
}

/// Execute a command.
pub fn execute(cli: Cli) -> Result<()> {
    let keys = KeyOptions {
        config: KeyConfig::from_values(cli.passphrase, cli.private_key),
        work_factor: cli.work_factor,
    };

    match cli.command {
        Command::Init {
            target,
            owner_name,
            owner_email,
        } => init::execute(&keys, &target, owner_name.zip(owner_email)),
        Command::Add { target, name } => add::execute(&keys, &target, &name),
        Command::Env { target, output } => env::execute(&keys, &target, &output),
        Command::Refresh { target } => refresh::execute(&keys, &target),
        Command::Completions { shell } => completions::execute(shell),
    }
}
