//! File system errors

use super::PackError;

/// Creates a file read error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> PackError {
    PackError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a directory scan error
pub fn walk_failed(path: impl Into<String>, reason: impl Into<String>) -> PackError {
    PackError::WalkFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> PackError {
    PackError::IoError {
        message: message.into(),
    }
}
