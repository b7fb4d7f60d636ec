//! Dependency records
//!
//! A [`Dependency`] is the identity of one resolved Maven artifact. Records are
//! compared and ordered field by field (group, artifact, type, version), which
//! is the order they appear in the lock manifest.

pub mod parse;

use std::fmt;

pub use parse::parse_dependency_list;

/// One resolved external dependency
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Dependency {
    /// Maven groupId (e.g. "com.google.guava")
    group_id: String,

    /// Maven artifactId (e.g. "guava")
    artifact_id: String,

    /// Packaging type (e.g. "jar", "pom")
    kind: String,

    /// Resolved version
    version: String,
}

impl Dependency {
    /// Create a new dependency record
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        kind: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            kind: kind.into(),
            version: version.into(),
        }
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    /// Packaging type, serialized as `<type>`
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Whether this dependency belongs to a group starting with `prefix`
    pub fn is_internal(&self, prefix: &str) -> bool {
        self.group_id.starts_with(prefix)
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}",
            self.group_id, self.artifact_id, self.kind, self.version
        )
    }
}
