//! secrets - manage encrypted secrets for your environments.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use openpaas_secrets::cli::output;
use openpaas_secrets::cli::{execute, Cli};
use openpaas_secrets::error::Error;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("OPENPAAS_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("openpaas_secrets=debug")
        } else {
            EnvFilter::new("openpaas_secrets=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time().with_writer(std::io::stderr))
        .init();

    let environment = cli
        .command
        .target()
        .map(|t| t.environment.clone())
        .unwrap_or_else(|| "<environment>".to_string());

    if let Err(e) = execute(cli) {
        output::error(&e.to_string());
        for hint in hints(&e, &environment) {
            output::hint(&hint);
        }
        std::process::exit(1);
    }
}

fn hints(error: &Error, environment: &str) -> Vec<String> {
    if error.is_key_not_found() {
        vec![
            format!("run: secrets init -b <baseDir> -e {}", environment),
            "if secrets exist from before your init, ask a colleague to run: secrets refresh"
                .to_string(),
        ]
    } else if error.is_authorization() {
        vec!["ask a user with access to run: secrets refresh".to_string()]
    } else if error.is_no_recipients() {
        vec![format!("run: secrets init -b <baseDir> -e {}", environment)]
    } else {
        Vec::new()
    }
}
