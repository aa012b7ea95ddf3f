//! File discovery for marker and asset patterns
//!
//! Walks a base directory and yields every regular file whose forward-slash
//! path relative to the base matches a glob. Matching uses wax so patterns
//! behave identically on every platform.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use wax::{CandidatePath, Glob, Pattern};

use crate::common::path_normalizer;
use crate::error::{Result, config_invalid, walk_failed};

/// Deepest directory level a pattern can match, or `None` when unbounded
///
/// Tree wildcards and repetitions can both span separators.
fn pattern_depth(pattern: &str) -> Option<usize> {
    let components: Vec<&str> = pattern.split('/').filter(|c| !c.is_empty()).collect();
    if components.iter().any(|c| c.contains("**") || c.contains('<')) {
        None
    } else {
        Some(components.len())
    }
}

/// Find all files beneath `base` matching `pattern`
///
/// A missing base directory has no matches. Any other traversal failure,
/// including a symbolic link loop, is an error.
pub fn find_files(base: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    if !base.is_dir() {
        return Ok(Vec::new());
    }

    let glob = Glob::new(pattern)
        .map_err(|e| config_invalid(format!("invalid pattern '{pattern}': {e}")))?;

    let mut walker = WalkDir::new(base)
        .min_depth(1)
        .follow_links(true)
        .sort_by_file_name();
    if let Some(depth) = pattern_depth(pattern) {
        walker = walker.max_depth(depth);
    }

    let mut matches = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| {
            let path = e
                .path()
                .map_or_else(|| base.display().to_string(), |p| p.display().to_string());
            walk_failed(path, e.to_string())
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let relative = path_normalizer::normalize(base, entry.path());
        if glob.matched(&CandidatePath::from(relative.as_str())).is_some() {
            matches.push(entry.into_path());
        }
    }

    Ok(matches)
}
