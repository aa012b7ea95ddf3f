//! Per-module asset archiving
//!
//! Four asset classes are taken from each module directory. Boot, config and
//! class scripts are verified as well as archived; public assets are only
//! archived. An optional module configuration script is verified but left to
//! the marker collectors for archiving. Verification and archiving run side by
//! side, both only read the source files.

use std::path::{Path, PathBuf};

use super::context::{PackContext, join_results};
use crate::archive::OutputSink;
use crate::common::path_normalizer::module_key;
use crate::discovery::find_files;
use crate::error::{Result, multiple_boot_scripts};

/// Files of one module, grouped by asset class
#[derive(Debug, Default)]
pub struct ModuleAssets {
    pub boot_script: Option<PathBuf>,
    /// Matches of the optional `config-script` pattern, verified only
    pub config_script: Vec<PathBuf>,
    pub config_scripts: Vec<PathBuf>,
    pub class_scripts: Vec<PathBuf>,
    pub public_assets: Vec<PathBuf>,
}

impl ModuleAssets {
    /// Scripts handed to the verifier
    pub fn scripts(&self) -> Vec<PathBuf> {
        let mut scripts: Vec<PathBuf> = self
            .boot_script
            .iter()
            .chain(&self.config_scripts)
            .chain(&self.class_scripts)
            .cloned()
            .collect();
        for file in &self.config_script {
            if !scripts.contains(file) {
                scripts.push(file.clone());
            }
        }
        scripts
    }

    /// Every file to archive
    pub fn all(&self) -> impl Iterator<Item = &PathBuf> {
        self.boot_script
            .iter()
            .chain(&self.config_scripts)
            .chain(&self.class_scripts)
            .chain(&self.public_assets)
    }
}

/// Locate the assets of a module directory
pub fn discover<W: OutputSink>(
    ctx: &PackContext<'_, W>,
    name: &str,
    dir: &Path,
) -> Result<ModuleAssets> {
    let patterns = &ctx.config.assets;

    let mut boot = find_files(dir, &patterns.boot_script)?;
    if boot.len() > 1 {
        return Err(multiple_boot_scripts(name, boot.len()));
    }

    Ok(ModuleAssets {
        boot_script: boot.pop(),
        config_script: match &patterns.config_script {
            Some(pattern) if ctx.verifies() => find_files(dir, pattern)?,
            _ => Vec::new(),
        },
        config_scripts: find_files(dir, &patterns.config_scripts)?,
        class_scripts: find_files(dir, &patterns.class_scripts)?,
        public_assets: find_files(dir, &patterns.public_assets)?,
    })
}

/// Verify and archive all assets of one module
pub fn archive_module<W: OutputSink>(
    ctx: &PackContext<'_, W>,
    name: &str,
    dir: &Path,
) -> Result<()> {
    ctx.ensure_running()?;
    let assets = discover(ctx, name, dir)?;
    let scripts = assets.scripts();

    let (verified, archived) = rayon::join(
        || ctx.verify_files(&scripts),
        || {
            assets
                .all()
                .try_for_each(|file| ctx.archive_file(&module_key(name, dir, file), file))
        },
    );
    join_results(verified, archived).map(|_| ())
}
