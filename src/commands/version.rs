//! Version command implementation

use crate::config::LintConfig;
use crate::error::Result;

/// Run version command
pub fn run() -> Result<()> {
    println!("modpack {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
    println!("  Profile: {}", build_profile());
    println!("  Archive format: tar.gz");
    println!("  Default linter: {}", LintConfig::default().command.join(" "));

    Ok(())
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
