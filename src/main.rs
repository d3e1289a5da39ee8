//! dotenv-decrypt - print .env values with encrypted ones decrypted.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use dotenv_decrypt::cli::output;
use dotenv_decrypt::cli::{execute, Cli};
use dotenv_decrypt::core::constants::LOG_ENV;

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays parseable.
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("dotenv_decrypt=debug")
        } else {
            EnvFilter::new("dotenv_decrypt=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    // Missing or broken secrets are not an error exit.
    if let Err(e) = execute(cli) {
        output::error(&e.to_string());
    }
}
