//! Configuration bundle collection
//!
//! Bundles are standalone files taken from every root, independent of any
//! module. They live in their own namespace keyed by archive path and are
//! verified once all of them are archived.

use rayon::prelude::*;
use std::path::{Path, PathBuf};

use super::context::PackContext;
use crate::archive::OutputSink;
use crate::common::path_normalizer::parent_relative_key;
use crate::discovery::find_files;
use crate::error::Result;
use crate::registry::BundleIndex;

/// Collect, archive and verify bundles; returns how many were found
pub fn collect<W: OutputSink>(ctx: &PackContext<'_, W>, roots: &[PathBuf]) -> Result<usize> {
    let index = BundleIndex::new();

    roots
        .par_iter()
        .try_for_each(|root| ctx.track(scan_root(ctx, &index, root)))?;

    ctx.verify_files(&index.files())?;
    Ok(index.len())
}

fn scan_root<W: OutputSink>(ctx: &PackContext<'_, W>, index: &BundleIndex, root: &Path) -> Result<()> {
    for file in find_files(root, &ctx.config.markers.bundle)? {
        ctx.ensure_running()?;
        let key = parent_relative_key(&file);
        index.register(&key, &file)?;
        ctx.archive_file(&key, &file)?;
    }
    Ok(())
}
