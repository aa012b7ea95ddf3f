//! Module collection
//!
//! Top-level modules are found by applying the top config pattern to every
//! root. Each of them is then expanded into its submodule tree, depth first,
//! with the trees of different top-level modules expanded concurrently.
//! Only once every marker is registered do the per-module assets follow.

use rayon::prelude::*;
use std::path::{Path, PathBuf};

use super::assets;
use super::context::PackContext;
use crate::archive::OutputSink;
use crate::common::path_normalizer::{module_key, parent_relative_key};
use crate::discovery::find_files;
use crate::error::{Result, walk_failed};
use crate::registry::ModuleRegistry;

/// Directory containing a marker file and its base name
fn marker_home(marker: &Path) -> Result<(PathBuf, String)> {
    let dir = marker
        .parent()
        .ok_or_else(|| walk_failed(marker.display().to_string(), "marker has no parent"))?;
    let name = dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| walk_failed(dir.display().to_string(), "directory has no name"))?;
    Ok((dir.to_path_buf(), name))
}

/// Collect every module and submodule, archive their assets, return sorted names
pub fn collect<W: OutputSink>(ctx: &PackContext<'_, W>, roots: &[PathBuf]) -> Result<Vec<String>> {
    let registry = ModuleRegistry::new();

    collect_top(ctx, &registry, roots)?;

    registry
        .keys()
        .par_iter()
        .try_for_each(|name| ctx.track(collect_sub(ctx, &registry, name)))?;

    // Every marker is archived now, continue with the other assets
    registry
        .entries()
        .par_iter()
        .try_for_each(|(name, dir)| ctx.track(assets::archive_module(ctx, name, dir)))?;

    Ok(registry.keys())
}

/// Register the modules found directly beneath each root
pub fn collect_top<W: OutputSink>(
    ctx: &PackContext<'_, W>,
    registry: &ModuleRegistry,
    roots: &[PathBuf],
) -> Result<()> {
    roots
        .par_iter()
        .try_for_each(|root| ctx.track(scan_root(ctx, registry, root)))
}

fn scan_root<W: OutputSink>(
    ctx: &PackContext<'_, W>,
    registry: &ModuleRegistry,
    root: &Path,
) -> Result<()> {
    for marker in find_files(root, &ctx.config.markers.top_config)? {
        ctx.ensure_running()?;
        let (dir, name) = marker_home(&marker)?;
        registry.register(&name, &dir)?;
        ctx.archive_file(&parent_relative_key(&marker), &marker)?;
    }
    Ok(())
}

/// Register the submodules of `name`, recursing into each one found
pub fn collect_sub<W: OutputSink>(
    ctx: &PackContext<'_, W>,
    registry: &ModuleRegistry,
    name: &str,
) -> Result<()> {
    let Some(home) = registry.get(name) else {
        return Ok(());
    };

    for marker in find_files(&home, &ctx.config.markers.sub_config)? {
        ctx.ensure_running()?;
        let (dir, base) = marker_home(&marker)?;
        let sub_name = format!("{name}.{base}");
        registry.register(&sub_name, &dir)?;
        ctx.archive_file(&module_key(&sub_name, &dir, &marker), &marker)?;
        collect_sub(ctx, registry, &sub_name)?;
    }

    Ok(())
}
