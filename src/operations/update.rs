//! Update operation
//!
//! Resolves the external dependencies and writes them over the current managed
//! body. The manifest is restored if anything fails.

use std::path::PathBuf;

use crate::error::Result;
use crate::manifest::ManifestRewriter;
use crate::resolver::DependencyResolver;
use crate::transaction::Transaction;

use super::LockOptions;

/// Result of an update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateOutcome {
    /// Manifest that was updated
    pub manifest: PathBuf,

    /// Number of dependencies written
    pub dependencies: usize,

    /// Whether the file content changed
    pub changed: bool,
}

/// High-level update operation
pub struct UpdateOperation<'a, R: DependencyResolver> {
    resolver: &'a R,
    options: &'a LockOptions,
}

impl<'a, R: DependencyResolver> UpdateOperation<'a, R> {
    pub fn new(resolver: &'a R, options: &'a LockOptions) -> Self {
        Self { resolver, options }
    }

    /// Execute the update
    pub fn execute(&self) -> Result<UpdateOutcome> {
        let rewriter = ManifestRewriter::open(&self.options.lock_dir)?;
        let transaction = Transaction::new(&rewriter);

        let dependencies = self
            .resolver
            .list_external(&self.options.internal_prefix)?;
        rewriter.write(&dependencies)?;
        let changed = rewriter.modified()?;

        transaction.commit();
        let manifest = rewriter.path().to_path_buf();
        rewriter.close()?;
        tracing::info!(
            manifest = %manifest.display(),
            count = dependencies.len(),
            changed,
            "updated lock manifest"
        );

        Ok(UpdateOutcome {
            manifest,
            dependencies: dependencies.len(),
            changed,
        })
    }
}
