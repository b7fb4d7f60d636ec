//! Transaction support for lock manifest rewrites
//!
//! A [`Transaction`] wraps a [`ManifestRewriter`] so the manifest is never left
//! half-updated: unless the transaction is committed, the snapshot taken when
//! the manifest was opened is put back when the transaction is dropped.
//!
//! ## Usage
//!
//! ```ignore
//! let rewriter = ManifestRewriter::open(&lock_dir)?;
//! let transaction = Transaction::new(&rewriter);
//!
//! // Perform writes...
//! rewriter.write(&dependencies)?;
//!
//! // On success:
//! transaction.commit();
//!
//! // On error (automatic via Drop if not committed):
//! // the manifest is restored
//! ```


use crate::error::Result;
use crate::manifest::ManifestRewriter;

/// Restore-on-drop guard over a manifest rewriter
#[derive(Debug)]
pub struct Transaction<'a> {
    /// Rewriter whose snapshot is restored on rollback
    rewriter: &'a ManifestRewriter,

    /// Whether the transaction has been committed
    committed: bool,
}

impl<'a> Transaction<'a> {
    /// Start a transaction over `rewriter`
    pub fn new(rewriter: &'a ManifestRewriter) -> Self {
        Self {
            rewriter,
            committed: false,
        }
    }

    /// Keep whatever has been written (prevent rollback)
    pub fn commit(mut self) {
        self.committed = true;
    }

    /// Restore the manifest now
    pub fn rollback(&mut self) -> Result<()> {
        if self.committed {
            return Ok(());
        }
        self.rewriter.restore()?;
        // Restored once; dropping must not restore again
        self.committed = true;
        Ok(())
    }
}

impl Drop for Transaction<'_> {
    fn drop(&mut self) {
        if !self.committed {
            tracing::debug!(
                manifest = %self.rewriter.path().display(),
                "rolling back lock manifest"
            );
            if let Err(e) = self.rollback() {
                tracing::warn!(
                    "Failed to restore {}: {}",
                    self.rewriter.path().display(),
                    e
                );
            }
        }
    }
}
