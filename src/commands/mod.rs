//! CLI command wrappers
//!
//! Thin glue between parsed arguments and the operations layer: resolve the
//! start directory, locate and open the project, construct the operation,
//! run it. All business logic lives in `operations`.

pub mod add;
pub mod completions;
pub mod diff;
pub mod list;
pub mod remove;
pub mod update;
pub mod version;

use std::path::PathBuf;

use crate::error::{Result, VeneerError};
use crate::project::Project;

fn resolve_start_dir(project: Option<PathBuf>) -> Result<PathBuf> {
    match project {
        Some(path) => Ok(path),
        None => std::env::current_dir().map_err(|e| VeneerError::IoError {
            message: format!("Failed to get current directory: {e}"),
        }),
    }
}

/// Locate and open the enclosing project; an absent manifest is fatal.
pub(crate) fn open_project(project: Option<PathBuf>) -> Result<Project> {
    let start = resolve_start_dir(project)?;
    let root = Project::find_from(&start)
        .ok_or_else(|| VeneerError::manifest_missing(start.display()))?;
    Project::open(&root)
}

/// Locate and open the enclosing project if there is one.
///
/// Used by `list`, which degrades to registry-only output outside a project.
/// An unparsable manifest is never partially trusted, so it degrades the
/// same way a missing one does, with a warning.
pub(crate) fn try_open_project(project: Option<PathBuf>) -> Result<Option<Project>> {
    let start = resolve_start_dir(project)?;
    match Project::find_from(&start) {
        Some(root) => match Project::open(&root) {
            Ok(project) => Ok(Some(project)),
            Err(VeneerError::ManifestParseFailed { path, .. }) => {
                eprintln!("Warning: ignoring unparsable manifest at {path}");
                Ok(None)
            }
            Err(e) => Err(e),
        },
        None => Ok(None),
    }
}
