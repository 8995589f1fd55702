use clap::Parser;

/// Arguments for the diff command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Summarize local changes across all installed components:\n    veneer diff\n\n\
                   Show a full line diff for one component:\n    veneer diff button")]
pub struct DiffArgs {
    /// Component to diff in detail; with none, summarize all installed
    pub component: Option<String>,
}
