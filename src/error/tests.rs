//! Error type tests
//!
//! Tests for DeplockError enum, its classification and conversions.

#![allow(clippy::expect_used)]

use std::path::Path;

use miette::Diagnostic;

use super::*;

macro_rules! test_error_contains {
    ($test_name:ident, $err:expr, $($contains:expr),+ $(,)?) => {
        #[test]
        fn $test_name() {
            let err = $err;
            let error_string = err.to_string();
            $(
                assert!(error_string.contains($contains),
                    "Error message should contain '{}', got: {}",
                    $contains,
                    error_string
                );
            )+
        }
    };
}

test_error_contains!(
    test_project_not_found_message,
    project_not_found("/no/such/dir"),
    "Project directory not found",
    "/no/such/dir"
);

test_error_contains!(
    test_manifest_malformed_message,
    manifest_malformed("pom.xml", "missing </dependencies>"),
    "Malformed manifest pom.xml",
    "missing </dependencies>"
);

test_error_contains!(
    test_tool_failed_carries_output,
    tool_failed(
        "mvn -f pom.xml dependency:list",
        "exit status: 1",
        "unresolvable artifact"
    ),
    "mvn -f pom.xml dependency:list",
    "exit status: 1",
    "unresolvable artifact"
);

test_error_contains!(
    test_file_write_failed_message,
    file_write_failed(Path::new("/ro/pom.xml"), "permission denied"),
    "Failed to write file",
    "permission denied"
);

#[test]
fn test_error_code() {
    let err = manifest_not_found("pom.xml");
    assert_eq!(
        err.code().map(|c| c.to_string()),
        Some("deplock::config::manifest_not_found".to_string())
    );
}

#[test]
fn test_configuration_kinds() {
    let errors = [
        project_not_found("dir"),
        manifest_not_found("pom.xml"),
        manifest_malformed("pom.xml", "no markers"),
        tool_unavailable("mvn", "not found"),
        config_read_failed("deplock.yaml", "denied"),
        config_parse_failed("deplock.yaml", "bad yaml"),
        config_invalid("passes must be at least 1"),
    ];
    for err in errors {
        assert_eq!(err.kind(), ErrorKind::Configuration, "{err}");
    }
}

#[test]
fn test_external_tool_kind() {
    let err = tool_failed("mvn", "exit status: 1", "");
    assert_eq!(err.kind(), ErrorKind::ExternalTool);
}

#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: DeplockError = io_err.into();
    assert!(matches!(err, DeplockError::IoError { .. }));
    assert_eq!(err.kind(), ErrorKind::Io);
}

#[test]
fn test_yaml_error_conversion() {
    let parse_result: std::result::Result<serde_yaml::Value, _> =
        serde_yaml::from_str("invalid: yaml: content: [unclosed");
    let yaml_err = parse_result.expect_err("yaml should not parse");
    let err: DeplockError = yaml_err.into();
    assert!(matches!(err, DeplockError::ConfigParseFailed { .. }));
}
