//! External linter process
//!
//! Feeds the wrapped source to the configured command on stdin and parses
//! unix-reporter output (`<name>:<line>:<column>: <message>`). The rule set is
//! written once to a temporary JSON file and passed with `--config`.

use std::io::Write;
use std::process::{Command, Stdio};
use tempfile::NamedTempFile;

use super::{Finding, SyntaxChecker};
use crate::config::LintConfig;
use crate::error::{Result, checker_failed, config_invalid, io_error};

/// Syntax checker backed by an external command
pub struct LinterCommand {
    program: String,
    args: Vec<String>,
    rules_file: NamedTempFile,
}

impl LinterCommand {
    pub fn new(config: &LintConfig) -> Result<Self> {
        let (program, args) = config
            .command
            .split_first()
            .ok_or_else(|| config_invalid("lint.command must name a program"))?;

        let mut rules_file = tempfile::Builder::new()
            .prefix("modpack-lint-")
            .suffix(".json")
            .tempfile()
            .map_err(|e| io_error(format!("Failed to create lint config: {e}")))?;
        rules_file
            .write_all(config.rules_json().as_bytes())
            .and_then(|()| rules_file.flush())
            .map_err(|e| io_error(format!("Failed to write lint config: {e}")))?;

        Ok(Self {
            program: program.clone(),
            args: args.to_vec(),
            rules_file,
        })
    }
}

impl SyntaxChecker for LinterCommand {
    fn check(&self, source: &str) -> Result<Vec<Finding>> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .arg("--config")
            .arg(self.rules_file.path())
            .arg("-")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| checker_failed(format!("cannot run '{}': {e}", self.program)))?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| checker_failed("checker stdin unavailable"))?;

        // Feed stdin from a separate thread so a chatty checker cannot block on a full stdout pipe.
        let output = std::thread::scope(|scope| {
            let feeder = scope.spawn(move || stdin.write_all(source.as_bytes()));
            let output = child.wait_with_output();
            let fed = feeder
                .join()
                .unwrap_or_else(|_| Err(std::io::Error::other("stdin writer panicked")));
            output.and_then(|output| {
                // A checker may legitimately stop reading once it found enough errors.
                match fed {
                    Err(e) if e.kind() != std::io::ErrorKind::BrokenPipe => Err(e),
                    _ => Ok(output),
                }
            })
        })
        .map_err(|e| checker_failed(format!("'{}' failed: {e}", self.program)))?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let findings: Vec<Finding> = stdout.lines().filter_map(parse_unix_line).collect();

        if findings.is_empty() && !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(checker_failed(format!(
                "'{}' exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }

        Ok(findings)
    }
}

/// Parse one unix-reporter line
///
/// The name part may itself contain colons (drive letters), so the first pair
/// of numeric fields decides where line and column are.
fn parse_unix_line(line: &str) -> Option<Finding> {
    let parts: Vec<&str> = line.split(':').collect();
    (1..parts.len().saturating_sub(2)).find_map(|i| {
        let line_no = parts[i].trim().parse::<usize>().ok()?;
        let column = parts[i + 1].trim().parse::<usize>().ok()?;
        let message = parts[i + 2..].join(":").trim().to_string();
        Some(Finding {
            line: line_no,
            column,
            message,
        })
    })
}
