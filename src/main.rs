//! deplock - Maven dependency lock manager
//!
//! Regenerates the pinned list of external Maven dependencies kept in a
//! checked-in POM from a live `mvn dependency:list` resolution.

use clap::Parser;

mod cli;
mod commands;
mod config;
mod dependency;
mod error;
mod logging;
mod manifest;
mod operations;
mod progress;
mod resolver;
#[cfg(test)]
mod test_fixtures;
mod transaction;

use cli::{Cli, Commands};

/// Exit code of `check` when the lock manifest is stale
const EXIT_STALE: i32 = 1;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.effective_log_level());

    let result = match &cli.command {
        Commands::Update => commands::update::run(&cli).map(|()| 0),
        Commands::Check(args) => {
            commands::check::run(&cli, args).map(|up_to_date| if up_to_date { 0 } else { EXIT_STALE })
        }
        Commands::Write(_) => commands::write::run(&cli).map(|()| 0),
        Commands::Version => commands::version::run().map(|()| 0),
        Commands::Completions(args) => commands::completions::run(args).map(|()| 0),
    };

    match result {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(e) => {
            tracing::debug!(kind = ?e.kind(), error = ?e, "command failed");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
