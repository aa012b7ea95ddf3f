//! Syntax checker errors
//!
//! Checker failures never fail a run; the verifier reports them through the
//! diagnostic sink. `VerificationFailed` is raised by callers that treat any
//! diagnostic as fatal.

use super::PackError;

/// Creates a checker failure error
pub fn checker_failed(reason: impl Into<String>) -> PackError {
    PackError::CheckerFailed {
        reason: reason.into(),
    }
}

/// Creates an error for a run that reported diagnostics under strict mode
pub fn verification_failed(count: usize) -> PackError {
    PackError::VerificationFailed { count }
}
