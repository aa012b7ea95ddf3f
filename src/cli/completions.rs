use clap::Parser;
use clap_complete::Shell;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    modpack completions bash > ~/.bash_completion.d/modpack\n\n\
                  Generate zsh completions:\n    modpack completions zsh > ~/.zfunc/_modpack\n\n\
                  Generate fish completions:\n    modpack completions fish > ~/.config/fish/completions/modpack.fish")]
pub struct CompletionsArgs {
    /// Shell type
    #[arg(value_enum, ignore_case = true)]
    pub shell: Shell,
}
