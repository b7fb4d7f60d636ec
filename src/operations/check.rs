//! Check operation
//!
//! Writes a fresh resolution into the manifest, compares it with the snapshot
//! and always restores the original content.

use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::dependency::Dependency;
use crate::error::Result;
use crate::manifest::ManifestRewriter;
use crate::resolver::DependencyResolver;
use crate::transaction::Transaction;

use super::LockOptions;

/// Result of a check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    /// Manifest that was checked
    pub manifest: PathBuf,

    /// Whether regeneration would leave the file byte-for-byte unchanged
    pub up_to_date: bool,

    /// Resolved dependencies missing from the manifest
    pub added: Vec<Dependency>,

    /// Manifest dependencies no longer resolved
    pub removed: Vec<Dependency>,
}

/// High-level check operation
pub struct CheckOperation<'a, R: DependencyResolver> {
    resolver: &'a R,
    options: &'a LockOptions,
}

impl<'a, R: DependencyResolver> CheckOperation<'a, R> {
    pub fn new(resolver: &'a R, options: &'a LockOptions) -> Self {
        Self { resolver, options }
    }

    /// Execute the check; the manifest is unchanged afterwards
    pub fn execute(&self) -> Result<CheckOutcome> {
        let rewriter = ManifestRewriter::open(&self.options.lock_dir)?;
        let mut transaction = Transaction::new(&rewriter);

        let resolved = self
            .resolver
            .list_external(&self.options.internal_prefix)?;
        rewriter.write(&resolved)?;
        let up_to_date = !rewriter.modified()?;

        transaction.rollback()?;
        drop(transaction);

        let locked: BTreeSet<Dependency> = rewriter.managed_dependencies().into_iter().collect();
        let resolved_set: BTreeSet<Dependency> = resolved.into_iter().collect();
        let added: Vec<Dependency> = resolved_set.difference(&locked).cloned().collect();
        let removed: Vec<Dependency> = locked.difference(&resolved_set).cloned().collect();

        let manifest = rewriter.path().to_path_buf();
        rewriter.close()?;
        tracing::info!(
            manifest = %manifest.display(),
            up_to_date,
            added = added.len(),
            removed = removed.len(),
            "checked lock manifest"
        );

        Ok(CheckOutcome {
            manifest,
            up_to_date,
            added,
            removed,
        })
    }
}
