use clap::Parser;

/// Arguments for the write command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Regenerate with the default two passes:\n    deplock write\n\n\
                  Regenerate with three passes:\n    deplock write --passes 3")]
pub struct WriteArgs {
    /// Resolve/write rounds after emptying the dependency section
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(usize))]
    pub passes: Option<usize>,
}
