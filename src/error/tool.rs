//! External build tool errors

use super::DeplockError;

/// Creates a tool unavailable error
pub fn unavailable(tool: impl Into<String>, reason: impl Into<String>) -> DeplockError {
    DeplockError::ToolUnavailable {
        tool: tool.into(),
        reason: reason.into(),
    }
}

/// Creates an external tool failure carrying the captured output
pub fn failed(
    command: impl Into<String>,
    status: impl Into<String>,
    output: impl Into<String>,
) -> DeplockError {
    DeplockError::ExternalToolFailed {
        command: command.into(),
        status: status.into(),
        output: output.into(),
    }
}
