//! `mvn dependency:list` backed resolver
//!
//! Every listing spawns one Maven process in the project directory:
//!
//! ```text
//! mvn -f <manifest> [-pl !m1,!m2] -am dependency:list -Dkey=value... [-DexcludeTransitive=true]
//! ```
//!
//! A non-zero exit is reported with the captured output attached; nothing is
//! retried.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use crate::config::Settings;
use crate::dependency::{Dependency, parse_dependency_list};
use crate::error::{self, Result};
use crate::progress::Spinner;

use super::DependencyResolver;

const LIST_GOAL: &str = "dependency:list";
const EXCLUDE_TRANSITIVE: &str = "-DexcludeTransitive=true";

/// Resolver that shells out to Maven
#[derive(Debug, Clone)]
pub struct MavenResolver {
    /// Working directory for every invocation
    project_dir: PathBuf,

    /// POM passed with `-f`, as given (relative to `project_dir` or absolute)
    manifest: String,

    /// Maven executable
    maven: String,

    /// Reactor modules excluded with `-pl`
    excluded_modules: Vec<String>,

    /// `-D` properties, in key order
    properties: Vec<(String, String)>,

    /// Appended verbatim
    extra_args: Vec<String>,
}

impl MavenResolver {
    /// Create a resolver for `manifest` inside `project_dir`
    ///
    /// Fails if the directory or manifest is missing, or if `mvn -v` cannot
    /// be run successfully.
    pub fn new(project_dir: &Path, manifest: &str, settings: &Settings) -> Result<Self> {
        if !project_dir.is_dir() {
            return Err(error::project_not_found(project_dir.display().to_string()));
        }
        let manifest_path = project_dir.join(manifest);
        if !manifest_path.is_file() {
            return Err(error::manifest_not_found(
                manifest_path.display().to_string(),
            ));
        }

        let resolver = Self {
            project_dir: project_dir.to_path_buf(),
            manifest: manifest.to_string(),
            maven: settings.maven.clone(),
            excluded_modules: settings.excluded_modules.clone(),
            properties: settings
                .properties
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
            extra_args: settings.extra_args.clone(),
        };
        resolver.probe()?;
        Ok(resolver)
    }

    /// Check that the executable runs
    fn probe(&self) -> Result<()> {
        let output = Command::new(&self.maven)
            .arg("-v")
            .current_dir(&self.project_dir)
            .output()
            .map_err(|e| error::tool_unavailable(&self.maven, e.to_string()))?;

        if !output.status.success() {
            return Err(error::tool_unavailable(
                &self.maven,
                format!("`{} -v` exited with {}", self.maven, output.status),
            ));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        if let Some(version) = stdout.lines().next() {
            tracing::debug!(version = version.trim(), "found build tool");
        }
        Ok(())
    }

    /// Arguments for one `dependency:list` run
    pub fn list_args(&self, direct_only: bool) -> Vec<String> {
        let mut args = vec!["-f".to_string(), self.manifest.clone()];

        if !self.excluded_modules.is_empty() {
            let modules: Vec<String> = self
                .excluded_modules
                .iter()
                .map(|m| {
                    if m.starts_with('!') {
                        m.clone()
                    } else {
                        format!("!{m}")
                    }
                })
                .collect();
            args.push("-pl".to_string());
            args.push(modules.join(","));
        }

        args.push("-am".to_string());
        args.push(LIST_GOAL.to_string());
        for (key, value) in &self.properties {
            args.push(format!("-D{key}={value}"));
        }
        if direct_only {
            args.push(EXCLUDE_TRANSITIVE.to_string());
        }
        args.extend(self.extra_args.iter().cloned());
        args
    }

    fn run_list(&self, direct_only: bool) -> Result<BTreeSet<Dependency>> {
        let args = self.list_args(direct_only);
        let command_line = format!("{} {}", self.maven, args.join(" "));
        tracing::info!(command = %command_line, "resolving dependencies");

        let output = {
            let _spinner = Spinner::start(if direct_only {
                "Resolving direct dependencies"
            } else {
                "Resolving dependencies"
            });
            Command::new(&self.maven)
                .args(&args)
                .current_dir(&self.project_dir)
                .output()
                .map_err(|e| error::tool_unavailable(&self.maven, e.to_string()))?
        };

        let combined = combined_output(&output);
        if !output.status.success() {
            tracing::error!(status = %output.status, "dependency listing failed");
            return Err(error::tool_failed(
                command_line,
                output.status.to_string(),
                combined,
            ));
        }

        let dependencies = parse_dependency_list(&combined);
        tracing::debug!(
            count = dependencies.len(),
            direct_only,
            "parsed dependency listing"
        );
        Ok(dependencies)
    }
}

fn combined_output(output: &Output) -> String {
    combine_streams(&output.stdout, &output.stderr)
}

/// Join stdout and stderr, keeping their last and first lines apart
fn combine_streams(stdout: &[u8], stderr: &[u8]) -> String {
    let mut combined = String::from_utf8_lossy(stdout).into_owned();
    if !combined.is_empty() && !combined.ends_with('\n') && !stderr.is_empty() {
        combined.push('\n');
    }
    combined.push_str(&String::from_utf8_lossy(stderr));
    combined
}

impl DependencyResolver for MavenResolver {
    fn list_all(&self) -> Result<BTreeSet<Dependency>> {
        self.run_list(false)
    }

    fn list_direct_only(&self) -> Result<BTreeSet<Dependency>> {
        self.run_list(true)
    }
}
