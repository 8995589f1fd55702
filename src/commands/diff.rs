//! Diff command CLI wrapper

use std::path::PathBuf;

use crate::cli::DiffArgs;
use crate::error::Result;
use crate::operations::diff::DiffOperation;
use crate::registry::{EmbeddedTemplates, Registry};

/// Run diff command
pub fn run(project: Option<PathBuf>, args: DiffArgs) -> Result<()> {
    let project = super::open_project(project)?;
    let registry = Registry::builtin()?;

    DiffOperation::new(&project, &registry, &EmbeddedTemplates)
        .execute(args.component.as_deref())
}
