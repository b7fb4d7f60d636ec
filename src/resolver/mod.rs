//! Dependency resolution
//!
//! deplock does not resolve anything itself. A [`DependencyResolver`] asks an
//! external build tool for the full and the direct-only dependency sets; the
//! transitive and external views are derived from those two.

pub mod maven;

use std::collections::BTreeSet;

use crate::dependency::Dependency;
use crate::error::Result;

pub use maven::MavenResolver;

/// Source of resolved dependency sets
pub trait DependencyResolver {
    /// Every dependency, direct and transitive
    fn list_all(&self) -> Result<BTreeSet<Dependency>>;

    /// Only dependencies declared directly by the project
    #[allow(dead_code)] // Used by tests
    fn list_direct_only(&self) -> Result<BTreeSet<Dependency>>;

    /// `list_all() - list_direct_only()`
    #[allow(dead_code)] // Used by tests
    fn list_transitive(&self) -> Result<BTreeSet<Dependency>> {
        let all = self.list_all()?;
        let direct = self.list_direct_only()?;
        Ok(all.difference(&direct).cloned().collect())
    }

    /// Dependencies whose group does not start with `internal_prefix`, sorted
    fn list_external(&self, internal_prefix: &str) -> Result<Vec<Dependency>> {
        let external: Vec<Dependency> = self
            .list_all()?
            .into_iter()
            .filter(|dep| !dep.is_internal(internal_prefix))
            .collect();
        tracing::debug!(count = external.len(), "resolved external dependencies");
        Ok(external)
    }
}
