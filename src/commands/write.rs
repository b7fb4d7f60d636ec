//! Write command CLI wrapper

use console::style;

use crate::cli::Cli;
use crate::error::Result;
use crate::operations::WriteOperation;

use super::Context;

/// Run write command
pub fn run(cli: &Cli) -> Result<()> {
    let context = Context::from_cli(cli)?;
    let resolver = context.resolver()?;
    let options = context.options();

    let outcome = WriteOperation::new(&resolver, &options).execute()?;

    println!(
        "{} Wrote {} ({} external dependencies, {} passes)",
        style("✓").green().bold(),
        outcome.manifest.display(),
        outcome.dependencies,
        outcome.passes
    );
    Ok(())
}
