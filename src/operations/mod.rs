//! Operations module for lock manifest workflows
//!
//! This module provides the high-level workflows:
//! - UpdateOperation: regenerate the managed body in place
//! - CheckOperation: compare against a fresh resolution without keeping changes
//! - WriteOperation: regenerate from an empty body with repeated passes
//!
//! Every workflow opens the lock manifest through a [`ManifestRewriter`] and
//! guards it with a [`Transaction`], so a failure restores the manifest before
//! the error reaches the caller.
//!
//! [`ManifestRewriter`]: crate::manifest::ManifestRewriter
//! [`Transaction`]: crate::transaction::Transaction

pub mod check;
pub mod update;
pub mod write;


use std::path::{Path, PathBuf};

use crate::config::Settings;

pub use check::{CheckOperation, CheckOutcome};
pub use update::UpdateOperation;
pub use write::WriteOperation;

/// Options shared by all workflows
#[derive(Debug, Clone)]
pub struct LockOptions {
    /// Directory containing the lock manifest
    pub lock_dir: PathBuf,

    /// Groups starting with this prefix are left out
    pub internal_prefix: String,

    /// Resolve/write rounds for [`WriteOperation`]
    pub passes: usize,
}

impl LockOptions {
    pub fn new(project_dir: &Path, settings: &Settings) -> Self {
        Self {
            lock_dir: settings.lock_dir(project_dir),
            internal_prefix: settings.internal_prefix.clone(),
            passes: settings.passes,
        }
    }
}
