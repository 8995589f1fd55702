use clap::Parser;

/// Arguments for the update command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Update every installed component with local changes:\n    veneer update\n\n\
                   Update specific components:\n    veneer update button dialog -y")]
pub struct UpdateArgs {
    /// Components to update (defaults to every installed component)
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
    fn test_cli_parsing_update_no_args() {
        let cli = Cli::try_parse_from(["veneer", "update"]).unwrap();
        match cli.command {
            Commands::Update(args) => {
                assert!(args.components.is_empty());
                assert!(!args.yes);
            }
            _ => panic!("Expected Update command"),
        }
    }

    #[test]
    fn test_cli_parsing_update_with_components() {
        let cli = Cli::try_parse_from(["veneer", "update", "button", "-y"]).unwrap();
        match cli.command {
            Commands::Update(args) => {
                assert_eq!(args.components, vec!["button"]);
                assert!(args.yes);
            }
            _ => panic!("Expected Update command"),
        }
    }
}
