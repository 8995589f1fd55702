use clap::Parser;

/// Arguments for the list command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   List every available component:\n    veneer list\n\n\
                   List only what is installed here:\n    veneer list --installed")]
pub struct ListArgs {
    /// Show only installed components
    #[arg(long)]
    pub installed: bool,
}
