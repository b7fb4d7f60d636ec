use clap::Parser;

/// Arguments for the check command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Check the lock POM in CI:\n    deplock check\n\n\
                  List the dependencies that would change:\n    deplock check --diff")]
pub struct CheckArgs {
    /// List dependencies that would be added or removed
    #[arg(long)]
    pub diff: bool,
}
