//! Error types and handling for modpack
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`module`]: Module and bundle identity errors
//! - [`archive`]: Archive output errors
//! - [`config`]: Configuration errors
//! - [`fs`]: File system errors
//! - [`verify`]: Syntax checker failures
//!
//! Every variant except `CheckerFailed` is structural and fatal to a run.
//! `VerificationFailed` is only raised by `pack --strict`.
//! Syntax findings from the verifier never become a `PackError`; they go
//! through the diagnostic sink.

#![allow(dead_code)]

pub mod archive;
pub mod config;
pub mod fs;
pub mod module;
pub mod verify;

pub use archive::{duplicate_entry, finish_failed, write_failed as archive_write_failed};
pub use config::{
    invalid as config_invalid, not_found as config_not_found, parse_failed as config_parse_failed,
    read_failed as config_read_failed,
};
pub use fs::{io_error, read_failed as file_read_failed, walk_failed};
pub use module::{duplicate_bundle, duplicate_module, module_cycle, multiple_boot_scripts};
pub use verify::{checker_failed, verification_failed};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for modpack operations
#[derive(Error, Diagnostic, Debug, Clone)]
pub enum PackError {
    // Module errors
    #[error("Duplicate module in archive: {name}")]
    #[diagnostic(
        code(modpack::module::duplicate),
        help("Module names must be unique across all roots; rename one of the module directories")
    )]
    DuplicateModule { name: String },

    #[error("Duplicate configuration in archive: {path}")]
    #[diagnostic(
        code(modpack::bundle::duplicate),
        help("Two roots provide a bundle at the same archive path")
    )]
    DuplicateBundle { path: String },

    #[error("Module '{module}' has {count} boot scripts")]
    #[diagnostic(
        code(modpack::module::multiple_boot_scripts),
        help("A module may contain at most one boot script")
    )]
    MultipleBootScripts { module: String, count: usize },

    #[error("Module '{name}' revisits directory {dir}")]
    #[diagnostic(
        code(modpack::module::cycle),
        help("A symbolic link makes a module directory reachable twice; remove the link")
    )]
    ModuleCycle { name: String, dir: String },

    // Archive errors
    #[error("Archive already contains entry: {path}")]
    #[diagnostic(
        code(modpack::archive::duplicate_entry),
        help("Two asset patterns match the same file; make the patterns disjoint")
    )]
    DuplicateArchiveEntry { path: String },

    #[error("Failed to write archive entry {path}: {reason}")]
    #[diagnostic(code(modpack::archive::write_failed))]
    ArchiveWriteFailed { path: String, reason: String },

    #[error("Failed to finish archive: {reason}")]
    #[diagnostic(code(modpack::archive::finish_failed))]
    ArchiveFinishFailed { reason: String },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(code(modpack::config::not_found))]
    ConfigNotFound { path: String },

    #[error("Failed to read configuration file: {path}: {reason}")]
    #[diagnostic(code(modpack::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(modpack::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(modpack::config::invalid))]
    ConfigInvalid { message: String },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(modpack::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to scan directory: {path}: {reason}")]
    #[diagnostic(code(modpack::fs::walk_failed))]
    WalkFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(modpack::fs::io_error))]
    IoError { message: String },

    // Checker errors
    #[error("Syntax checker failed: {reason}")]
    #[diagnostic(
        code(modpack::verify::checker_failed),
        help("Check that the lint command is installed and accepts --config and stdin input")
    )]
    CheckerFailed { reason: String },

    #[error("{count} problem(s) reported while verifying scripts")]
    #[diagnostic(
        code(modpack::verify::strict_failed),
        help("Fix the reported problems or run without --strict")
    )]
    VerificationFailed { count: usize },

    // Run control
    #[error("Run aborted after a failure in another branch")]
    #[diagnostic(code(modpack::run::aborted))]
    Aborted,
}

impl PackError {
    /// Whether this error only reflects a failure observed elsewhere in the run
    pub fn is_aborted(&self) -> bool {
        matches!(self, PackError::Aborted)
    }
}

impl From<std::io::Error> for PackError {
    fn from(err: std::io::Error) -> Self {
        PackError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for PackError {
    fn from(err: serde_yaml::Error) -> Self {
        PackError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, PackError>;
