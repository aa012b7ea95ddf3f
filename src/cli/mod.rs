//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - pack: Pack command arguments
//! - list: List command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};

pub mod completions;
pub mod list;
pub mod pack;

pub use completions::CompletionsArgs;
pub use list::ListArgs;
pub use pack::PackArgs;

/// modpack - module archive packer
///
/// Collect modules, submodules and configuration bundles into one archive.
#[derive(Parser, Debug)]
#[command(
    name = "modpack",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Pack modules and configuration bundles into a single archive",
    long_about = "modpack scans source roots for modules (directories holding a marker file), \
                  expands them into submodule trees, and writes every module asset and \
                  configuration bundle into one gzip-compressed tar archive. Scripts can be \
                  checked with an external linter on the way.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  modpack pack src -o app.tar.gz           \x1b[90m# Pack one root\x1b[0m\n   \
                  modpack pack core plugins -o app.tar.gz  \x1b[90m# Pack several roots\x1b[0m\n   \
                  modpack pack src -o app.tar.gz --strict  \x1b[90m# Fail on lint problems\x1b[0m\n   \
                  modpack list src                         \x1b[90m# Show discovered modules\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Pack source roots into an archive
    Pack(PackArgs),

    /// List the modules and bundles that would be packed
    List(ListArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
