//! Keysmith - Generate cryptographically secure signing secrets.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use keysmith::cli::output;
use keysmith::cli::{execute, Cli};
use keysmith::core::constants::{DEFAULT_LOG_FILTER, LOG_ENV};

fn main() {
    let _cli = Cli::parse();

    // Logs go to stderr so stdout carries only the key report
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute() {
        tracing::debug!(error = ?e, "key generation failed");
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
