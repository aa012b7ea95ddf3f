use clap::Parser;
use std::path::PathBuf;

/// Arguments for the pack command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Pack a single root:\n    modpack pack src --output app.tar.gz\n\n\
                   Pack several roots with a custom layout:\n    modpack pack core plugins -o app.tar.gz --config layout.yaml\n\n\
                   Skip script verification:\n    modpack pack src -o app.tar.gz --no-verify")]
pub struct PackArgs {
    /// Source roots to scan for modules and bundles
    #[arg(required = true, value_name = "ROOT")]
    pub roots: Vec<PathBuf>,

    /// Archive file to write
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: PathBuf,

    /// Layout and lint configuration (defaults to ./modpack.yaml when present)
    #[arg(long, short = 'c', value_name = "FILE", env = "MODPACK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Do not run the syntax checker
    #[arg(long)]
    pub no_verify: bool,

    /// Fail when any problem is reported by the syntax checker
    #[arg(long, conflicts_with = "no_verify")]
    pub strict: bool,

    /// Suppress progress and summary output
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::super::{Cli, Commands};
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn test_cli_parsing_pack() {
        let cli = Cli::try_parse_from(["modpack", "pack", "core", "plugins", "-o", "out.tar.gz"])
            .expect("valid arguments");
        match cli.command {
            Commands::Pack(args) => {
                assert_eq!(
                    args.roots,
                    vec![PathBuf::from("core"), PathBuf::from("plugins")]
                );
                assert_eq!(args.output, PathBuf::from("out.tar.gz"));
                assert!(!args.no_verify);
                assert!(!args.strict);
            }
            _ => panic!("Expected Pack command"),
        }
    }

    #[test]
    fn test_cli_pack_requires_output() {
        assert!(Cli::try_parse_from(["modpack", "pack", "src"]).is_err());
    }

    #[test]
    fn test_cli_pack_requires_root() {
        assert!(Cli::try_parse_from(["modpack", "pack", "-o", "out.tar.gz"]).is_err());
    }

    #[test]
    fn test_cli_strict_conflicts_with_no_verify() {
        let result = Cli::try_parse_from([
            "modpack",
            "pack",
            "src",
            "-o",
            "out.tar.gz",
            "--strict",
            "--no-verify",
        ]);
        assert!(result.is_err());
    }
}
