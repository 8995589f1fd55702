use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    veneer completions bash > ~/.bash_completion.d/veneer\n\n\
                  Generate zsh completions:\n    veneer completions zsh > ~/.zfunc/_veneer\n\n\
                  Generate fish completions:\n    veneer completions fish > ~/.config/fish/completions/veneer.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
