//! Main orchestrator for the pack operation
//!
//! Runs bundle collection and module collection side by side, joins them,
//! then finalizes the archive. A run only succeeds after the output sink has
//! confirmed the archive is completely written, so callers may reopen the
//! output as soon as `run` returns.

use std::path::PathBuf;

use super::context::{PackContext, join_results};
use super::{bundles, modules};
use crate::archive::{Archive, OutputSink};
use crate::config::PackConfig;
use crate::error::Result;
use crate::ui::{ProgressReporter, SilentProgressReporter};
use crate::verify::{DiagnosticSink, SyntaxChecker, Verifier};

/// Result of a successful pack run
#[derive(Debug)]
pub struct PackOutcome<W> {
    /// Every module name, top-level and dotted submodule names, sorted
    pub modules: Vec<String>,
    pub bundles: usize,
    /// Archive paths written, sorted
    pub entries: Vec<String>,
    pub diagnostics: usize,
    /// The finished output sink
    pub output: W,
}

/// Main orchestrator for the pack operation
pub struct PackOperation<'a> {
    config: &'a PackConfig,
    verification: Option<(&'a dyn DiagnosticSink, &'a dyn SyntaxChecker)>,
    progress: &'a dyn ProgressReporter,
}

impl<'a> PackOperation<'a> {
    /// Create an operation without verification or progress output
    pub fn new(config: &'a PackConfig) -> Self {
        Self {
            config,
            verification: None,
            progress: &SilentProgressReporter,
        }
    }

    /// Check scripts with `checker`, reporting diagnostics to `sink`
    pub fn with_verification(
        mut self,
        sink: &'a dyn DiagnosticSink,
        checker: &'a dyn SyntaxChecker,
    ) -> Self {
        self.verification = Some((sink, checker));
        self
    }

    pub fn with_progress(mut self, progress: &'a dyn ProgressReporter) -> Self {
        self.progress = progress;
        self
    }

    /// Pack every module and bundle found under `roots` into `output`
    ///
    /// Fails on the first structural error. The archive is then abandoned:
    /// the output holds at most a truncated stream and its sink is never
    /// finished.
    pub fn run<W: OutputSink>(&self, roots: &[PathBuf], output: W) -> Result<PackOutcome<W>> {
        tracing::info!(
            roots = roots.len(),
            verify = self.verification.is_some(),
            "pack run started"
        );

        let verifier = match self.verification {
            Some((sink, checker)) => Verifier::new(Some(sink), checker),
            None => Verifier::disabled(),
        };
        let ctx = PackContext::new(self.config, Archive::new(output), verifier, self.progress);

        let (bundles, modules) = rayon::join(
            || ctx.track(bundles::collect(&ctx, roots)),
            || ctx.track(modules::collect(&ctx, roots)),
        );

        let (bundles, modules) = match join_results(bundles, modules) {
            Ok(collected) => collected,
            Err(e) => {
                ctx.progress().abandon();
                let e = ctx.originating_error(e);
                ctx.into_archive().abandon();
                tracing::debug!(error = %e, "pack run failed");
                return Err(e);
            }
        };

        let diagnostics = ctx.diagnostics();
        let archive = ctx.into_archive();
        let entries = archive.paths();
        let output = archive.finish().inspect_err(|_| self.progress.abandon())?;
        self.progress.finish(entries.len());

        tracing::info!(
            modules = modules.len(),
            bundles,
            entries = entries.len(),
            diagnostics,
            "archive closed"
        );

        Ok(PackOutcome {
            modules,
            bundles,
            entries,
            diagnostics,
            output,
        })
    }
}
