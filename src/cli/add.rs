use clap::Parser;

/// Arguments for the add command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Add a component:\n    veneer add dialog\n\n\
                   Add several components at once:\n    veneer add button card input\n\n\
                   Add everything in the registry:\n    veneer add --all\n\n\
                   Re-copy over existing files without asking:\n    veneer add dialog --overwrite")]
pub struct AddArgs {
    /// Components to add (dependencies are pulled in automatically)
    pub components: Vec<String>,

    /// Skip confirmation prompts
    #[arg(long, short = 'y')]
    pub yes: bool,

    /// Add every component in the registry
    #[arg(long)]
    pub all: bool,

    /// Overwrite files that already exist without asking
    #[arg(long)]
    pub overwrite: bool,
}

#[cfg(test)]
mod tests {
    use super::super::{Cli, Commands};
    use clap::Parser;

    #[test]
    fn test_cli_parsing_add() {
        let cli = Cli::try_parse_from(["veneer", "add", "dialog"]).unwrap();
        match cli.command {
            Commands::Add(args) => {
                assert_eq!(args.components, vec!["dialog"]);
                assert!(!args.yes);
                assert!(!args.all);
                assert!(!args.overwrite);
            }
            _ => panic!("Expected Add command"),
        }
    }

    #[test]
    fn test_cli_parsing_add_multiple_with_flags() {
        let cli =
            Cli::try_parse_from(["veneer", "add", "button", "card", "-y", "--overwrite"]).unwrap();
        match cli.command {
            Commands::Add(args) => {
                assert_eq!(args.components, vec!["button", "card"]);
                assert!(args.yes);
                assert!(args.overwrite);
            }
            _ => panic!("Expected Add command"),
        }
    }

    #[test]
    fn test_cli_parsing_add_all() {
        let cli = Cli::try_parse_from(["veneer", "add", "--all"]).unwrap();
        match cli.command {
            Commands::Add(args) => {
                assert!(args.components.is_empty());
                assert!(args.all);
            }
            _ => panic!("Expected Add command"),
        }
    }
}
