//! modpack - module archive packer
//!
//! Scans source roots for modules and configuration bundles and writes them,
//! together with every module asset, into a single deterministic archive.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod archive;
mod cli;
mod commands;
mod common;
mod config;
mod discovery;
mod error;
mod operations;
mod registry;
mod ui;
mod verify;

use cli::{Cli, Commands};

/// Environment variable holding a tracing filter directive
const LOG_ENV: &str = "MODPACK_LOG";

/// Install the stderr log subscriber
///
/// `MODPACK_LOG` wins over `--verbose`; without either only warnings show.
fn init_tracing(verbose: bool) {
    let default = if verbose { "modpack=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Pack(args) => commands::pack::run(args),
        Commands::List(args) => commands::list::run(args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
