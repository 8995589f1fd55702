//! List command CLI wrapper
//!
//! Unlike the mutating commands, list works outside a project: with no
//! manifest in reach it lists the registry as if nothing were installed.

use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::cli::ListArgs;
use crate::error::Result;
use crate::operations::list::{ListOperation, ListOptions};
use crate::registry::Registry;

/// Run list command
pub fn run(project: Option<PathBuf>, args: ListArgs) -> Result<()> {
    let registry = Registry::builtin()?;
    let options = ListOptions::from(&args);

    let installed: BTreeSet<String> = match super::try_open_project(project)? {
        Some(project) => project
            .manifest
            .installed_components
            .iter()
            .cloned()
            .collect(),
        None => BTreeSet::new(),
    };

    ListOperation::new(&registry, installed).execute(&options)
}
