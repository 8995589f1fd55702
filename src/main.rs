//! Veneer - UI component installer
//!
//! A command-line tool that copies pre-written UI component sources into a
//! consumer application's source tree, rewriting the shared utils import to
//! the project's configured alias, and tracks installed components in a
//! components.json manifest.

use clap::Parser;

mod cli;
mod commands;
mod common;
mod error;
mod manifest;
mod operations;
mod progress;
mod project;
mod reconcile;
mod registry;
mod resolver;
mod transform;
mod ui;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Add(args) => commands::add::run(cli.project, args),
        Commands::Remove(args) => commands::remove::run(cli.project, args),
        Commands::Update(args) => commands::update::run(cli.project, args),
        Commands::Diff(args) => commands::diff::run(cli.project, args),
        Commands::List(args) => commands::list::run(cli.project, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
