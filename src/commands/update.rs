//! Update command CLI wrapper

use console::style;

use crate::cli::Cli;
use crate::error::Result;
use crate::operations::UpdateOperation;

use super::Context;

/// Run update command
pub fn run(cli: &Cli) -> Result<()> {
    let context = Context::from_cli(cli)?;
    let resolver = context.resolver()?;
    let options = context.options();

    let outcome = UpdateOperation::new(&resolver, &options).execute()?;

    if outcome.changed {
        println!(
            "{} Updated {} ({} external dependencies)",
            style("✓").green().bold(),
            outcome.manifest.display(),
            outcome.dependencies
        );
    } else {
        println!(
            "{} {} is already up to date ({} external dependencies)",
            style("✓").green().bold(),
            outcome.manifest.display(),
            outcome.dependencies
        );
    }
    Ok(())
}
