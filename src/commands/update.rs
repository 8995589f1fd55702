//! Update command CLI wrapper

use std::path::PathBuf;

use crate::cli::UpdateArgs;
use crate::error::Result;
use crate::operations::update::{UpdateOperation, UpdateOptions};
use crate::registry::{EmbeddedTemplates, Registry};

/// Run update command
pub fn run(project: Option<PathBuf>, args: UpdateArgs) -> Result<()> {
    let project = super::open_project(project)?;
    let registry = Registry::builtin()?;
    let options = UpdateOptions::from(&args);

    UpdateOperation::new(&project, &registry, &EmbeddedTemplates)
        .execute(&args.components, &options)
}
