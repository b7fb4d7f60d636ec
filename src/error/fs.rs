//! File system errors

use std::path::Path;

use super::DeplockError;

/// Creates a file read failed error
pub fn read_failed(path: &Path, reason: impl ToString) -> DeplockError {
    DeplockError::FileReadFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: &Path, reason: impl ToString) -> DeplockError {
    DeplockError::FileWriteFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> DeplockError {
    DeplockError::IoError {
        message: message.into(),
    }
}
