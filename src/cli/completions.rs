use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    deplock completions bash > ~/.bash_completion.d/deplock\n\n\
                  Generate zsh completions:\n    deplock completions zsh > ~/.zfunc/_deplock\n\n\
                  Generate fish completions:\n    deplock completions fish > ~/.config/fish/completions/deplock.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
