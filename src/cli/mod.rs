//! Command-line interface.

pub mod completions;
pub mod get;
pub mod list;
pub mod output;
pub mod status;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::config::{CandidateOrder, Options};
use crate::core::secrets::Secrets;
use crate::error::Result;

/// Print env file values, decrypting them with a private key from the environment.
#[derive(Parser)]
#[command(
    name = "dotenv-decrypt",
    about = "Print .env values, decrypting encrypted ones with DOTENV_PRIVATE_KEY*",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Directory containing the env files
    #[arg(short = 'C', long, env = "DOTENV_DECRYPT_DIR", default_value = ".", global = true)]
    pub dir: PathBuf,

    /// Try keys in variable-name order instead of environment order
    #[arg(long, global = true)]
    pub sorted: bool,

    /// Print values as a JSON object
    #[arg(long)]
    pub json: bool,

    /// Show debug logs on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Commands. Without one, every resolved variable is printed.
#[derive(Subcommand)]
pub enum Command {
    /// Print the value of one variable (empty if unset)
    Get {
        /// Variable name
        name: String,
    },

    /// Show discovered keys and the env file in use
    Status,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

impl Cli {
    /// Lookup options selected by the flags.
    pub fn options(&self) -> Options {
        let order = if self.sorted {
            CandidateOrder::Lexical
        } else {
            CandidateOrder::Environment
        };
        Options::in_dir(&self.dir).with_order(order)
    }
}

/// Execute the parsed command line.
pub fn execute(cli: Cli) -> Result<()> {
    let secrets = Secrets::new(cli.options());

    match cli.command {
        None => list::execute(&secrets, cli.json),
        Some(Command::Get { name }) => get::execute(&secrets, &name),
        Some(Command::Status) => status::execute(&secrets),
        Some(Command::Completions { shell }) => completions::execute(shell),
    }
}
