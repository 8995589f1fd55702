//! Remove command CLI wrapper

use std::path::PathBuf;

use crate::cli::RemoveArgs;
use crate::error::Result;
use crate::operations::remove::{RemoveOperation, RemoveOptions};
use crate::registry::Registry;

/// Run remove command
pub fn run(project: Option<PathBuf>, args: RemoveArgs) -> Result<()> {
    let project = super::open_project(project)?;
    let registry = Registry::builtin()?;
    let options = RemoveOptions::from(&args);

    RemoveOperation::new(&project, &registry).execute(&args.components, &options)
}
