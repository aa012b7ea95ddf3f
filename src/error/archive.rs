//! Archive output errors

use super::PackError;

/// Creates an error for a path written to the archive twice
pub fn duplicate_entry(path: impl Into<String>) -> PackError {
    PackError::DuplicateArchiveEntry { path: path.into() }
}

/// Creates an archive write error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> PackError {
    PackError::ArchiveWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an archive finalization error
pub fn finish_failed(reason: impl Into<String>) -> PackError {
    PackError::ArchiveFinishFailed {
        reason: reason.into(),
    }
}
