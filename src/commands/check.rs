//! Check command CLI wrapper

use console::style;

use crate::cli::{CheckArgs, Cli};
use crate::error::Result;
use crate::operations::{CheckOperation, CheckOutcome};

use super::Context;

/// Run check command
///
/// Returns whether the lock manifest is up to date.
pub fn run(cli: &Cli, args: &CheckArgs) -> Result<bool> {
    let context = Context::from_cli(cli)?;
    let resolver = context.resolver()?;
    let options = context.options();

    let outcome = CheckOperation::new(&resolver, &options).execute()?;
    print_outcome(&outcome, args.diff);
    Ok(outcome.up_to_date)
}

fn print_outcome(outcome: &CheckOutcome, diff: bool) {
    if outcome.up_to_date {
        println!(
            "{} {} is up to date",
            style("✓").green().bold(),
            outcome.manifest.display()
        );
        return;
    }

    println!(
        "{} {} {}; run `deplock update`",
        style("✗").yellow().bold(),
        outcome.manifest.display(),
        stale_summary(outcome)
    );

    if diff {
        for dependency in &outcome.added {
            println!("  {} {}", style("+").green(), dependency);
        }
        for dependency in &outcome.removed {
            println!("  {} {}", style("-").red(), dependency);
        }
    }
}

/// Why a stale manifest needs an update
fn stale_summary(outcome: &CheckOutcome) -> String {
    if outcome.added.is_empty() && outcome.removed.is_empty() {
        "needs an update (same dependencies, formatting differs)".to_string()
    } else {
        format!(
            "needs an update ({} to add, {} to remove)",
            outcome.added.len(),
            outcome.removed.len()
        )
    }
}
