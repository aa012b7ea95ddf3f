//! Shared context for a pack run
//!
//! Bundles the archive, the verifier and the configuration handed to every
//! collector, together with the failure state that lets concurrent branches
//! stop early once one of them hit a structural error.

use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::archive::{Archive, OutputSink};
use crate::config::PackConfig;
use crate::error::{PackError, Result};
use crate::ui::ProgressReporter;
use crate::verify::Verifier;

/// Shared context for a pack run
pub struct PackContext<'a, W: OutputSink> {
    pub config: &'a PackConfig,
    archive: Archive<W>,
    verifier: Verifier<'a>,
    progress: &'a dyn ProgressReporter,
    failed: AtomicBool,
    first_failure: Mutex<Option<PackError>>,
}

impl<'a, W: OutputSink> PackContext<'a, W> {
    pub fn new(
        config: &'a PackConfig,
        archive: Archive<W>,
        verifier: Verifier<'a>,
        progress: &'a dyn ProgressReporter,
    ) -> Self {
        Self {
            config,
            archive,
            verifier,
            progress,
            failed: AtomicBool::new(false),
            first_failure: Mutex::new(None),
        }
    }

    /// Fails with `Aborted` once any branch has failed
    pub fn ensure_running(&self) -> Result<()> {
        if self.failed.load(Ordering::Acquire) {
            Err(PackError::Aborted)
        } else {
            Ok(())
        }
    }

    /// Record a structural failure so sibling branches stop
    pub fn track<T>(&self, result: Result<T>) -> Result<T> {
        if let Err(e) = &result {
            if !e.is_aborted() {
                let mut slot = self
                    .first_failure
                    .lock()
                    .unwrap_or_else(std::sync::PoisonError::into_inner);
                if slot.is_none() {
                    *slot = Some(e.clone());
                }
                self.failed.store(true, Ordering::Release);
            }
        }
        result
    }

    /// The failure that started the abort, preferred over any `Aborted`
    pub fn originating_error(&self, observed: PackError) -> PackError {
        self.first_failure
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .take()
            .unwrap_or(observed)
    }

    /// Append a file to the archive
    pub fn archive_file(&self, key: &str, source: &Path) -> Result<()> {
        self.ensure_running()?;
        self.track(self.archive.append_file(key, source))?;
        self.progress.entry_archived(key);
        Ok(())
    }

    /// Verify files concurrently; a no-op when verification is disabled
    pub fn verify_files(&self, files: &[PathBuf]) -> Result<()> {
        if !self.verifier.is_enabled() {
            return Ok(());
        }
        files.par_iter().try_for_each(|file| {
            self.ensure_running()?;
            self.track(self.verifier.verify(file))
        })
    }

    pub fn verifies(&self) -> bool {
        self.verifier.is_enabled()
    }

    pub fn diagnostics(&self) -> usize {
        self.verifier.reported()
    }

    pub fn progress(&self) -> &dyn ProgressReporter {
        self.progress
    }

    /// Give up the archive for finalization
    pub fn into_archive(self) -> Archive<W> {
        self.archive
    }
}

/// Combine the results of two joined branches
///
/// A real error wins over `Aborted`, the left one over the right one.
pub fn join_results<A, B>(left: Result<A>, right: Result<B>) -> Result<(A, B)> {
    match (left, right) {
        (Ok(a), Ok(b)) => Ok((a, b)),
        (Err(l), Err(r)) if l.is_aborted() => Err(r),
        (Err(e), _) | (_, Err(e)) => Err(e),
    }
}
