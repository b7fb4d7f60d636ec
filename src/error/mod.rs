//! Error types and handling for deplock
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`config`]: Project, manifest and settings errors
//! - [`tool`]: External build tool errors
//! - [`fs`]: File system errors

#![allow(dead_code)]

pub mod config;
pub mod fs;
pub mod tool;

#[cfg(test)]
mod tests;

#[allow(unused_imports)]
pub use config::{
    invalid as config_invalid, manifest_malformed, manifest_not_found,
    parse_failed as config_parse_failed, project_not_found, read_failed as config_read_failed,
};
#[allow(unused_imports)]
pub use fs::{io_error, read_failed as file_read_failed, write_failed as file_write_failed};
#[allow(unused_imports)]
pub use tool::{failed as tool_failed, unavailable as tool_unavailable};

use miette::Diagnostic;
use thiserror::Error;

/// Broad classification of a [`DeplockError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad or missing input detected before any work was done
    Configuration,
    /// The external resolver ran and reported failure
    ExternalTool,
    /// Reading or writing files failed
    Io,
}

/// Main error type for deplock operations
#[derive(Error, Diagnostic, Debug)]
pub enum DeplockError {
    // Configuration errors
    #[error("Project directory not found: {path}")]
    #[diagnostic(
        code(deplock::config::project_not_found),
        help("Pass --project-dir or run deplock from the project root")
    )]
    ProjectDirNotFound { path: String },

    #[error("Manifest not found: {path}")]
    #[diagnostic(code(deplock::config::manifest_not_found))]
    ManifestNotFound { path: String },

    #[error("Malformed manifest {path}: {reason}")]
    #[diagnostic(
        code(deplock::config::manifest_malformed),
        help("The lock manifest needs exactly one <dependencies> line and a matching </dependencies> line")
    )]
    ManifestMalformed { path: String, reason: String },

    #[error("Build tool '{tool}' is not available: {reason}")]
    #[diagnostic(
        code(deplock::config::tool_unavailable),
        help("Install Maven or point --mvn at the executable")
    )]
    ToolUnavailable { tool: String, reason: String },

    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(deplock::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file {path}: {reason}")]
    #[diagnostic(code(deplock::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(deplock::config::invalid))]
    ConfigInvalid { message: String },

    // External tool errors
    #[error("`{command}` failed ({status})\n{output}")]
    #[diagnostic(
        code(deplock::tool::failed),
        help("The manifest was restored to its previous content")
    )]
    ExternalToolFailed {
        command: String,
        status: String,
        output: String,
    },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(deplock::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(deplock::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(deplock::fs::io_error))]
    IoError { message: String },
}

impl DeplockError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ProjectDirNotFound { .. }
            | Self::ManifestNotFound { .. }
            | Self::ManifestMalformed { .. }
            | Self::ToolUnavailable { .. }
            | Self::ConfigReadFailed { .. }
            | Self::ConfigParseFailed { .. }
            | Self::ConfigInvalid { .. } => ErrorKind::Configuration,
            Self::ExternalToolFailed { .. } => ErrorKind::ExternalTool,
            Self::FileReadFailed { .. } | Self::FileWriteFailed { .. } | Self::IoError { .. } => {
                ErrorKind::Io
            }
        }
    }
}

impl From<std::io::Error> for DeplockError {
    fn from(err: std::io::Error) -> Self {
        DeplockError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for DeplockError {
    fn from(err: serde_yaml::Error) -> Self {
        DeplockError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, DeplockError>;
