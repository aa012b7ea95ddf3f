//! Command implementations for modpack CLI

pub mod completions;
pub mod list;
pub mod pack;
pub mod version;

use std::path::PathBuf;

use crate::config::PackConfig;
use crate::error::{Result, io_error};

/// Resolve the configuration relative to the current directory
fn load_config(explicit: Option<&std::path::Path>) -> Result<PackConfig> {
    let cwd: PathBuf = std::env::current_dir()
        .map_err(|e| io_error(format!("Failed to get current directory: {e}")))?;
    PackConfig::resolve(explicit, &cwd)
}
