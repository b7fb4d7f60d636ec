//! Settings for deplock
//!
//! Settings are layered, later sources winning:
//! 1. built-in defaults
//! 2. `.deplock.yaml` in the project directory, or the file passed with `--config`
//! 3. command line flags ([`SettingsOverrides`])


use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{self, Result};
use crate::manifest::LOCK_MANIFEST;

/// Settings file looked up in the project directory
pub const CONFIG_FILE: &str = ".deplock.yaml";

/// Group prefix of the project's own artifacts
pub const DEFAULT_INTERNAL_PREFIX: &str = "io.joynr";

/// Resolution passes used when writing from scratch
pub const DEFAULT_PASSES: usize = 2;

/// Resolved settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Groups starting with this prefix are not locked
    pub internal_prefix: String,

    /// Maven executable
    pub maven: String,

    /// POM handed to Maven with `-f`, relative to the project directory
    pub manifest: String,

    /// Directory holding the lock manifest, relative to the project directory
    pub lock_dir: Option<PathBuf>,

    /// Reactor modules left out of resolution (`groupId:artifactId` or path)
    pub excluded_modules: Vec<String>,

    /// User properties passed as `-Dkey=value`
    pub properties: BTreeMap<String, String>,

    /// Extra arguments appended to every Maven invocation
    pub extra_args: Vec<String>,

    /// Resolve/write rounds for `deplock write`
    pub passes: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            internal_prefix: DEFAULT_INTERNAL_PREFIX.to_string(),
            maven: "mvn".to_string(),
            manifest: LOCK_MANIFEST.to_string(),
            lock_dir: None,
            excluded_modules: Vec::new(),
            properties: BTreeMap::from([("android.sdk.skip".to_string(), "true".to_string())]),
            extra_args: Vec::new(),
            passes: DEFAULT_PASSES,
        }
    }
}

/// Values given on the command line
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub internal_prefix: Option<String>,
    pub maven: Option<String>,
    pub manifest: Option<String>,
    pub lock_dir: Option<PathBuf>,
    pub excluded_modules: Vec<String>,
    pub passes: Option<usize>,
}

impl Settings {
    /// Parse settings from YAML, filling unset fields with defaults
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let has_content = yaml
            .lines()
            .map(str::trim)
            .any(|line| !line.is_empty() && !line.starts_with('#'));
        if !has_content {
            return Ok(Self::default());
        }
        let settings: Self = serde_yaml::from_str(yaml)?;
        Ok(settings)
    }

    /// Load settings for `project_dir`
    ///
    /// An explicit `config` path must exist; the implicit `.deplock.yaml` is
    /// optional.
    pub fn load(project_dir: &Path, config: Option<&Path>) -> Result<Self> {
        let path = match config {
            Some(path) => {
                if !path.is_file() {
                    return Err(error::config_read_failed(
                        path.display().to_string(),
                        "file does not exist",
                    ));
                }
                path.to_path_buf()
            }
            None => {
                let implicit = project_dir.join(CONFIG_FILE);
                if !implicit.is_file() {
                    tracing::debug!("no {CONFIG_FILE} found, using defaults");
                    return Ok(Self::default());
                }
                implicit
            }
        };

        let yaml = fs::read_to_string(&path)
            .map_err(|e| error::config_read_failed(path.display().to_string(), e.to_string()))?;
        let settings = Self::from_yaml(&yaml).map_err(|e| match e {
            error::DeplockError::ConfigParseFailed { reason, .. } => {
                error::config_parse_failed(path.display().to_string(), reason)
            }
            other => other,
        })?;
        tracing::debug!(config = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Apply command line overrides
    #[must_use]
    pub fn with_overrides(mut self, overrides: SettingsOverrides) -> Self {
        if let Some(prefix) = overrides.internal_prefix {
            self.internal_prefix = prefix;
        }
        if let Some(maven) = overrides.maven {
            self.maven = maven;
        }
        if let Some(manifest) = overrides.manifest {
            self.manifest = manifest;
        }
        if let Some(lock_dir) = overrides.lock_dir {
            self.lock_dir = Some(lock_dir);
        }
        self.excluded_modules.extend(overrides.excluded_modules);
        if let Some(passes) = overrides.passes {
            self.passes = passes;
        }
        self
    }

    /// Reject settings no workflow can run with
    pub fn validate(&self) -> Result<()> {
        if self.passes == 0 {
            return Err(error::config_invalid("passes must be at least 1"));
        }
        if self.maven.trim().is_empty() {
            return Err(error::config_invalid("maven executable must not be empty"));
        }
        if self.manifest.trim().is_empty() {
            return Err(error::config_invalid("manifest must not be empty"));
        }
        Ok(())
    }

    /// Directory holding the lock manifest
    pub fn lock_dir(&self, project_dir: &Path) -> PathBuf {
        match &self.lock_dir {
            Some(dir) => project_dir.join(dir),
            None => project_dir.to_path_buf(),
        }
    }
}
