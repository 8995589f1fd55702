//! Installed-state reconciliation
//!
//! Classifies a component against what is actually on disk in the target
//! project: not installed, installed and untouched, or installed with local
//! edits. The comparison is transform-adjusted: template content gets the
//! same import rewrite it would get on copy, so an untouched installation
//! always classifies as unmodified regardless of the project's alias.

pub mod diff;

use crate::error::{Result, VeneerError};
use crate::project::Project;
use crate::registry::{ComponentDefinition, TemplateStore};
use crate::transform;

pub use diff::{DiffLine, DiffSummary};

/// Disk state of one component in a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentState {
    /// The component's first file does not exist under the components path
    MissingOnDisk,
    /// All files match the freshly transformed template content
    Unmodified,
    /// At least one file differs; summary aggregates every file
    Modified(DiffSummary),
}

/// Classify one component against the project's disk state.
///
/// Presence is decided by the component's first file. Content comparison is
/// trim-insensitive and covers every file in the definition; a missing
/// secondary file compares against empty content and therefore reports as
/// modified.
pub fn classify(
    project: &Project,
    templates: &dyn TemplateStore,
    def: &ComponentDefinition,
) -> Result<ComponentState> {
    let Some(first) = def.files.first() else {
        return Ok(ComponentState::MissingOnDisk);
    };
    if !project.component_file(first).is_file() {
        return Ok(ComponentState::MissingOnDisk);
    }

    let mut summary = DiffSummary::default();

    for file in def.files {
        let desired = desired_content(project, templates, file)?;
        let local = local_content(project, file)?;

        let desired = desired.trim();
        let local = local.trim();

        if desired != local {
            summary.merge(diff::summarize(desired, local));
        }
    }

    if summary.is_empty() {
        Ok(ComponentState::Unmodified)
    } else {
        Ok(ComponentState::Modified(summary))
    }
}

/// Template content for one file after the project's import rewrite, i.e.
/// exactly what `add` would write.
pub fn desired_content(
    project: &Project,
    templates: &dyn TemplateStore,
    file: &str,
) -> Result<String> {
    let raw = templates
        .read(file)
        .ok_or_else(|| VeneerError::TemplateMissing {
            name: file.to_string(),
        })?;
    Ok(transform::rewrite_imports(
        raw,
        &project.manifest.aliases.utils,
    ))
}

fn local_content(project: &Project, file: &str) -> Result<String> {
    let path = project.component_file(file);
    if !path.is_file() {
        return Ok(String::new());
    }
    std::fs::read_to_string(&path).map_err(|e| VeneerError::file_read(path.display(), e))
}
