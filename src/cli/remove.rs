use clap::Parser;

/// Arguments for the remove command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Remove a component:\n    veneer remove dialog\n\n\
                   Remove without confirmation:\n    veneer remove button card -y")]
pub struct RemoveArgs {
    /// Components to remove
    #[arg(required = true)]
    pub components: Vec<String>,

    /// Skip confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

#[cfg(test)]
mod tests {
    use super::super::{Cli, Commands};
    use clap::Parser;

    #[test]
    fn test_cli_parsing_remove() {
        let cli = Cli::try_parse_from(["veneer", "remove", "dialog", "-y"]).unwrap();
        match cli.command {
            Commands::Remove(args) => {
                assert_eq!(args.components, vec!["dialog"]);
                assert!(args.yes);
            }
            _ => panic!("Expected Remove command"),
        }
    }

    #[test]
    fn test_cli_parsing_remove_requires_components() {
        assert!(Cli::try_parse_from(["veneer", "remove"]).is_err());
    }
}
