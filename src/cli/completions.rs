use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    better11 completions --shell bash > ~/.bash_completion.d/better11\n\n\
                  Generate zsh completions:\n    better11 completions --shell zsh > ~/.zfunc/_better11\n\n\
                  Generate PowerShell completions:\n    better11 completions --shell powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}
