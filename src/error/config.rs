//! Configuration errors

use super::DeplockError;

/// Creates a project directory not found error
pub fn project_not_found(path: impl Into<String>) -> DeplockError {
    DeplockError::ProjectDirNotFound { path: path.into() }
}

/// Creates a manifest not found error
pub fn manifest_not_found(path: impl Into<String>) -> DeplockError {
    DeplockError::ManifestNotFound { path: path.into() }
}

/// Creates a malformed manifest error
pub fn manifest_malformed(path: impl Into<String>, reason: impl Into<String>) -> DeplockError {
    DeplockError::ManifestMalformed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a config read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> DeplockError {
    DeplockError::ConfigReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a config parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> DeplockError {
    DeplockError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid config error
pub fn invalid(message: impl Into<String>) -> DeplockError {
    DeplockError::ConfigInvalid {
        message: message.into(),
    }
}
