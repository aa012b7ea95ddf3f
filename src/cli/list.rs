use clap::Parser;
use std::path::PathBuf;

/// Arguments for the list command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List modules under a root:\n    modpack list src\n\n\
                  Show every archive entry:\n    modpack list src --entries")]
pub struct ListArgs {
    /// Source roots to scan for modules and bundles
    #[arg(required = true, value_name = "ROOT")]
    pub roots: Vec<PathBuf>,

    /// Layout configuration (defaults to ./modpack.yaml when present)
    #[arg(long, short = 'c', value_name = "FILE", env = "MODPACK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Also print every archive entry path
    #[arg(long)]
    pub entries: bool,
}
