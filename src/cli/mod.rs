//! Command-line interface.

pub mod generate;
pub mod output;

use clap::Parser;

/// Keysmith - Generate cryptographically secure signing secrets.
///
/// Takes no arguments: every run prints a fresh HS512 key.
#[derive(Parser, Debug)]
#[command(
    name = "keysmith",
    about = "Generate a cryptographically secure, Base64-encoded JWT signing key",
    version,
    after_help = "Set KEYSMITH_LOG=debug for diagnostic logging on stderr."
)]
pub struct Cli {}

/// Execute the default run.
pub fn execute() -> crate::error::Result<()> {
    generate::execute()
}
