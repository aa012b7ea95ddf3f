//! Script verification
//!
//! Runs script-like assets through an external syntax checker and reports
//! every finding through a caller supplied sink. Verification is opt-in: a
//! verifier without a sink never reads a file or invokes the checker.
//!
//! Sources are wrapped as `void\n<source>\n;` before checking, so that a bare
//! expression at the top of a file is not flagged as an unexpected token.
//! Reported lines are shifted back by one to point into the original file.

pub mod linter;

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::{Result, file_read_failed};

pub use linter::LinterCommand;

/// Line prepended to every checked source
const PREFIX: &str = "void";

/// One finding of the checker, in wrapped-source coordinates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub line: usize,
    pub column: usize,
    pub message: String,
}

/// One finding mapped back onto the original file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxDiagnostic {
    pub path: PathBuf,
    /// 1-based line in the original file (0 for whole-file failures)
    pub line: usize,
    pub column: usize,
    pub message: String,
}

impl SyntaxDiagnostic {
    /// `<path>:<line>:<column>`
    pub fn location(&self) -> String {
        format!("{}:{}:{}", self.path.display(), self.line, self.column)
    }
}

/// Receiver of diagnostics
///
/// Invoked concurrently from several verification tasks.
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, location: &str, message: &str);
}

impl<F> DiagnosticSink for F
where
    F: Fn(&str, &str) + Send + Sync,
{
    fn report(&self, location: &str, message: &str) {
        self(location, message);
    }
}

/// The external syntax checker seam
pub trait SyntaxChecker: Send + Sync {
    /// Check an already wrapped source text
    fn check(&self, source: &str) -> Result<Vec<Finding>>;
}

/// Wrap a source so leading expressions parse as statements
pub fn wrap_source(source: &str) -> String {
    format!("{PREFIX}\n{source}\n;")
}

/// Map a checker line back onto the original source
///
/// Findings on the synthetic first or last line are clamped to the nearest
/// real line.
fn original_line(wrapped_line: usize, source_lines: usize) -> usize {
    wrapped_line.saturating_sub(1).clamp(1, source_lines.max(1))
}

/// Verifies files against the configured checker
pub struct Verifier<'a> {
    target: Option<(&'a dyn DiagnosticSink, &'a dyn SyntaxChecker)>,
    reported: AtomicUsize,
}

impl<'a> Verifier<'a> {
    /// Create a verifier; without a sink every call is a no-op
    pub fn new(sink: Option<&'a dyn DiagnosticSink>, checker: &'a dyn SyntaxChecker) -> Self {
        Self {
            target: sink.map(|sink| (sink, checker)),
            reported: AtomicUsize::new(0),
        }
    }

    /// A verifier that never checks anything
    pub fn disabled() -> Self {
        Self {
            target: None,
            reported: AtomicUsize::new(0),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.target.is_some()
    }

    /// Number of diagnostics delivered so far
    pub fn reported(&self) -> usize {
        self.reported.load(Ordering::Relaxed)
    }

    fn emit(&self, sink: &dyn DiagnosticSink, diagnostic: &SyntaxDiagnostic) {
        sink.report(&diagnostic.location(), &diagnostic.message);
        self.reported.fetch_add(1, Ordering::Relaxed);
    }

    /// Verify one file
    ///
    /// Only an unreadable file is an error. A checker failure is reported as a
    /// single diagnostic at line 0 so sibling files are unaffected.
    pub fn verify(&self, path: &Path) -> Result<()> {
        let Some((sink, checker)) = self.target else {
            return Ok(());
        };

        let bytes = std::fs::read(path)
            .map_err(|e| file_read_failed(path.display().to_string(), e.to_string()))?;

        let findings = match String::from_utf8(bytes) {
            Ok(source) => checker
                .check(&wrap_source(&source))
                .map(|findings| (source.lines().count(), findings)),
            Err(e) => Err(crate::error::checker_failed(format!("not UTF-8 text: {e}"))),
        };

        match findings {
            Ok((source_lines, findings)) => {
                for finding in findings {
                    let diagnostic = SyntaxDiagnostic {
                        path: path.to_path_buf(),
                        line: original_line(finding.line, source_lines),
                        column: finding.column,
                        message: finding.message,
                    };
                    self.emit(sink, &diagnostic);
                }
            }
            Err(e) => {
                tracing::warn!(file = %path.display(), error = %e, "syntax checker failed");
                let diagnostic = SyntaxDiagnostic {
                    path: path.to_path_buf(),
                    line: 0,
                    column: 0,
                    message: e.to_string(),
                };
                self.emit(sink, &diagnostic);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
pub(crate) mod tests {
    use super::*;
    use crate::error::{PackError, checker_failed};
    use std::sync::Mutex;
    use tempfile::TempDir;

    /// Flags every wrapped line containing `@@` at the marker's column
    pub(crate) struct MarkerChecker;

    impl SyntaxChecker for MarkerChecker {
        fn check(&self, source: &str) -> Result<Vec<Finding>> {
            if source.contains("@crash") {
                return Err(checker_failed("checker crashed"));
            }
            Ok(source
                .lines()
                .enumerate()
                .filter_map(|(index, line)| {
                    line.find("@@").map(|column| Finding {
                        line: index + 1,
                        column: column + 1,
                        message: "Unexpected '@@'.".to_string(),
                    })
                })
                .collect())
        }
    }

    #[derive(Default)]
    pub(crate) struct CollectingSink {
        pub(crate) reports: Mutex<Vec<(String, String)>>,
    }

    impl DiagnosticSink for CollectingSink {
        fn report(&self, location: &str, message: &str) {
            self.reports
                .lock()
                .expect("sink lock")
                .push((location.to_string(), message.to_string()));
        }
    }

    impl CollectingSink {
        pub(crate) fn sorted(&self) -> Vec<(String, String)> {
            let mut reports = self.reports.lock().expect("sink lock").clone();
            reports.sort();
            reports
        }
    }

    fn write(temp: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = temp.path().join(name);
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    #[test]
    fn test_wrap_source() {
        assert_eq!(wrap_source("a()"), "void\na()\n;");
    }

    #[test]
    fn test_original_line() {
        assert_eq!(original_line(2, 3), 1);
        assert_eq!(original_line(4, 3), 3);
        // Synthetic prefix and trailer lines
        assert_eq!(original_line(1, 3), 1);
        assert_eq!(original_line(5, 3), 3);
    }

    #[test]
    fn test_checker_line_two_reported_as_line_one() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = write(&temp, "boot.js", "start(@@);\nok();\n");
        let sink = CollectingSink::default();
        let verifier = Verifier::new(Some(&sink), &MarkerChecker);

        verifier.verify(&path).expect("verify");

        let reports = sink.sorted();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].0, format!("{}:1:7", path.display()));
        assert_eq!(reports[0].1, "Unexpected '@@'.");
        assert_eq!(verifier.reported(), 1);
    }

    #[test]
    fn test_every_finding_reported() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = write(&temp, "x.js", "@@\nfine\n@@\n");
        let sink = CollectingSink::default();
        let verifier = Verifier::new(Some(&sink), &MarkerChecker);

        verifier.verify(&path).expect("verify");

        let lines: Vec<String> = sink.sorted().into_iter().map(|(l, _)| l).collect();
        assert_eq!(
            lines,
            vec![
                format!("{}:1:1", path.display()),
                format!("{}:3:1", path.display())
            ]
        );
    }

    #[test]
    fn test_disabled_verifier_reads_nothing() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let verifier = Verifier::disabled();
        assert!(!verifier.is_enabled());
        // A missing file would fail if it were read
        verifier
            .verify(&temp.path().join("absent.js"))
            .expect("no-op");
    }

    #[test]
    fn test_no_sink_means_disabled() {
        let verifier = Verifier::new(None, &MarkerChecker);
        assert!(!verifier.is_enabled());
    }

    #[test]
    fn test_non_utf8_reported_not_fatal() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().join("binary.js");
        std::fs::write(&path, [0xff, 0xfe, 0x00]).expect("Failed to write file");
        let sink = CollectingSink::default();
        let verifier = Verifier::new(Some(&sink), &MarkerChecker);

        verifier.verify(&path).expect("not fatal");
        assert_eq!(sink.sorted().len(), 1);
    }

    #[test]
    fn test_unreadable_file_is_fatal() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let sink = CollectingSink::default();
        let verifier = Verifier::new(Some(&sink), &MarkerChecker);

        let err = verifier
            .verify(&temp.path().join("absent.js"))
            .expect_err("missing file");
        assert!(matches!(err, PackError::FileReadFailed { .. }));
    }

    #[test]
    fn test_closure_sink() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = write(&temp, "x.js", "@@");
        let count = AtomicUsize::new(0);
        let sink = |_: &str, _: &str| {
            count.fetch_add(1, Ordering::Relaxed);
        };
        let verifier = Verifier::new(Some(&sink), &MarkerChecker);

        verifier.verify(&path).expect("verify");
        assert_eq!(count.load(Ordering::Relaxed), 1);
    }
}
