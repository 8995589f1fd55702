//! Add command CLI wrapper

use std::path::PathBuf;

use crate::cli::AddArgs;
use crate::error::Result;
use crate::operations::add::{AddOperation, AddOptions};
use crate::registry::{EmbeddedTemplates, Registry};

/// Run add command
pub fn run(project: Option<PathBuf>, args: AddArgs) -> Result<()> {
    let project = super::open_project(project)?;
    let registry = Registry::builtin()?;
    let options = AddOptions::from(&args);

    AddOperation::new(&project, &registry, &EmbeddedTemplates).execute(&args.components, &options)
}
