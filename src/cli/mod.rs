//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - add: Add command arguments
//! - remove: Remove command arguments
//! - update: Update command arguments
//! - diff: Diff command arguments
//! - list: List command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod add;
pub mod completions;
pub mod diff;
pub mod list;
pub mod remove;
pub mod update;

pub use add::AddArgs;
pub use completions::CompletionsArgs;
pub use diff::DiffArgs;
pub use list::ListArgs;
pub use remove::RemoveArgs;
pub use update::UpdateArgs;

/// Veneer - UI component installer
///
/// Copy polished UI components into your project and keep them reconciled.
#[derive(Parser, Debug)]
#[command(
    name = "veneer",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Copy polished UI components into your project",
    long_about = "Veneer copies pre-written UI component sources (buttons, dialogs, forms, ...) \
                  into your application's source tree, rewrites the shared utils import to your \
                  configured alias, and tracks what is installed in components.json.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  veneer add dialog               \x1b[90m# Copy the dialog component into your project\x1b[0m\n   \
                  veneer add carousel             \x1b[90m# Also pulls in button, a dependency\x1b[0m\n   \
                  veneer remove button -y         \x1b[90m# Delete button's files and manifest entry\x1b[0m\n   \
                  veneer update                   \x1b[90m# Re-copy templates over locally modified components\x1b[0m\n   \
                  veneer diff button              \x1b[90m# Show local changes against the bundled template\x1b[0m\n   \
                  veneer list --installed         \x1b[90m# List installed components\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Project directory (defaults to current directory)
    #[arg(long, short = 'p', global = true, env = "VENEER_PROJECT")]
    pub project: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add components and their dependencies to your project
    Add(AddArgs),

    /// Remove components from your project
    Remove(RemoveArgs),

    /// Overwrite locally modified components with the latest templates
    Update(UpdateArgs),

    /// Show changes between installed components and their templates
    Diff(DiffArgs),

    /// List available components
    List(ListArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
