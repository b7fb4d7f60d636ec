//! Write-from-scratch operation
//!
//! Empties the managed body, then resolves and writes `passes` times. Maven
//! reads the lock manifest while resolving, and starting from an empty body can
//! briefly surface two versions of a plugin-induced dependency. A second pass
//! over the first pass's output settles on one version; the pass count is
//! configurable for build tool versions that behave differently.

use std::path::PathBuf;

use crate::error::{self, Result};
use crate::manifest::ManifestRewriter;
use crate::resolver::DependencyResolver;
use crate::transaction::Transaction;

use super::LockOptions;

/// Result of a full regeneration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOutcome {
    /// Manifest that was written
    pub manifest: PathBuf,

    /// Number of dependencies in the final pass
    pub dependencies: usize,

    /// Passes performed
    pub passes: usize,
}

/// High-level write operation
pub struct WriteOperation<'a, R: DependencyResolver> {
    resolver: &'a R,
    options: &'a LockOptions,
}

impl<'a, R: DependencyResolver> WriteOperation<'a, R> {
    pub fn new(resolver: &'a R, options: &'a LockOptions) -> Self {
        Self { resolver, options }
    }

    /// Execute the regeneration
    pub fn execute(&self) -> Result<WriteOutcome> {
        let passes = self.options.passes;
        if passes == 0 {
            return Err(error::config_invalid("passes must be at least 1"));
        }

        let rewriter = ManifestRewriter::open(&self.options.lock_dir)?;
        let transaction = Transaction::new(&rewriter);

        rewriter.reset()?;
        let mut count = 0;
        for pass in 1..=passes {
            let dependencies = self
                .resolver
                .list_external(&self.options.internal_prefix)?;
            rewriter.write(&dependencies)?;
            count = dependencies.len();
            tracing::debug!(pass, count, "completed resolution pass");
        }

        transaction.commit();
        let manifest = rewriter.path().to_path_buf();
        rewriter.close()?;
        tracing::info!(
            manifest = %manifest.display(),
            count,
            passes,
            "wrote lock manifest from scratch"
        );

        Ok(WriteOutcome {
            manifest,
            dependencies: count,
            passes,
        })
    }
}
