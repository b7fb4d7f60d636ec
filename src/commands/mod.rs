//! Command implementations for deplock CLI
//!
//! Commands are thin wrappers: they turn CLI flags into [`Settings`], build a
//! [`MavenResolver`] and hand both to the matching operation.

pub mod check;
pub mod completions;
pub mod update;
pub mod version;
pub mod write;

use std::path::PathBuf;

use crate::cli::Cli;
use crate::config::Settings;
use crate::error::{self, Result};
use crate::operations::LockOptions;
use crate::resolver::MavenResolver;

/// Project directory and settings for one command run
#[derive(Debug)]
pub struct Context {
    pub project_dir: PathBuf,
    pub settings: Settings,
}

impl Context {
    /// Resolve the project directory and layer settings from `cli`
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let project_dir = resolve_project_dir(cli.project_dir.clone())?;
        if !project_dir.is_dir() {
            return Err(error::project_not_found(project_dir.display().to_string()));
        }

        let settings =
            Settings::load(&project_dir, cli.config.as_deref())?.with_overrides(cli.overrides());
        settings.validate()?;
        tracing::debug!(project = %project_dir.display(), ?settings, "resolved settings");

        Ok(Self {
            project_dir,
            settings,
        })
    }

    /// Maven resolver for the configured manifest
    pub fn resolver(&self) -> Result<MavenResolver> {
        MavenResolver::new(&self.project_dir, &self.settings.manifest, &self.settings)
    }

    /// Options for the lock workflows
    pub fn options(&self) -> LockOptions {
        LockOptions::new(&self.project_dir, &self.settings)
    }
}

/// Use the given project directory or fall back to the current one
fn resolve_project_dir(project_dir: Option<PathBuf>) -> Result<PathBuf> {
    match project_dir {
        Some(path) => Ok(path),
        None => std::env::current_dir()
            .map_err(|e| error::io_error(format!("Failed to get current directory: {e}"))),
    }
}
