//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - check: Check command arguments
//! - write: Write command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod check;
pub mod completions;
pub mod write;

pub use check::CheckArgs;
pub use completions::CompletionsArgs;
pub use write::WriteArgs;

use crate::config::SettingsOverrides;
use crate::logging::DEFAULT_LOG_LEVEL;

/// deplock - Maven dependency lock manager
///
/// Regenerates the pinned list of external dependencies in a checked-in POM.
#[derive(Parser, Debug)]
#[command(
    name = "deplock",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Pins external Maven dependencies into a checked-in POM",
    long_about = "deplock asks Maven for the resolved dependency list of a project and writes every \
                  external dependency into the <dependencies> section of a lock POM, so dependency \
                  changes show up in review.",
    after_help = "Examples:\n   \
                  deplock update                       # Refresh the lock POM in place\n   \
                  deplock check                        # Exit 1 if the lock POM is stale\n   \
                  deplock write --passes 3             # Regenerate from an empty section\n   \
                  deplock -l dependency-lock update    # Lock POM lives in a subdirectory\n"
)]
pub struct Cli {
    /// Project directory (defaults to current directory)
    #[arg(long, short = 'p', global = true, env = "DEPLOCK_PROJECT_DIR")]
    pub project_dir: Option<PathBuf>,

    /// POM resolved by Maven, relative to the project directory
    #[arg(long, short = 'f', global = true, value_name = "POM")]
    pub manifest: Option<String>,

    /// Directory containing the lock pom.xml, relative to the project directory
    #[arg(long, short = 'l', global = true, value_name = "DIR")]
    pub lock_dir: Option<PathBuf>,

    /// Maven executable
    #[arg(long = "mvn", global = true, env = "DEPLOCK_MVN", value_name = "PATH")]
    pub maven: Option<String>,

    /// Group prefix of the project's own artifacts, which are not locked
    #[arg(long, global = true, value_name = "PREFIX")]
    pub internal_prefix: Option<String>,

    /// Reactor module to leave out of resolution (repeatable)
    #[arg(long = "exclude", global = true, value_name = "MODULE")]
    pub excluded_modules: Vec<String>,

    /// Settings file (defaults to .deplock.yaml in the project directory)
    #[arg(long, short = 'c', global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log level: 10 debug, 20 info, 30 warning, 40 error, 50 critical
    #[arg(long, global = true, default_value_t = DEFAULT_LOG_LEVEL, value_name = "LEVEL")]
    pub log_level: u8,

    /// Enable verbose output (same as --log-level 10)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Effective numeric log level
    pub fn effective_log_level(&self) -> u8 {
        if self.verbose {
            10
        } else {
            self.log_level
        }
    }

    /// Settings given as flags
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            internal_prefix: self.internal_prefix.clone(),
            maven: self.maven.clone(),
            manifest: self.manifest.clone(),
            lock_dir: self.lock_dir.clone(),
            excluded_modules: self.excluded_modules.clone(),
            passes: match &self.command {
                Commands::Write(args) => args.passes,
                _ => None,
            },
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Regenerate the lock POM in place
    Update,

    /// Verify the lock POM matches a fresh resolution (exit 1 if stale)
    Check(CheckArgs),

    /// Regenerate the lock POM from an empty dependency section
    Write(WriteArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
