//! Update operation
//!
//! Re-copies the latest templates over locally modified components. This is
//! a disclosed destructive overwrite, never a merge: local edits to the
//! selected components are lost. Components whose files match the templates
//! are left alone.

use crate::cli::UpdateArgs;
use crate::common::fs as fsx;
use crate::error::Result;
use crate::progress::CopyProgress;
use crate::project::Project;
use crate::reconcile::{self, ComponentState, DiffSummary};
use crate::registry::{Registry, TemplateStore};
use crate::ui;

/// Configuration options for update
#[derive(Debug, Clone, Default)]
pub struct UpdateOptions {
    /// Skip confirmation prompt
    pub yes: bool,
}

impl From<&UpdateArgs> for UpdateOptions {
    fn from(args: &UpdateArgs) -> Self {
        Self { yes: args.yes }
    }
}

/// High-level update operation
pub struct UpdateOperation<'a> {
    project: &'a Project,
    registry: &'a Registry,
    templates: &'a dyn TemplateStore,
}

impl<'a> UpdateOperation<'a> {
    pub fn new(
        project: &'a Project,
        registry: &'a Registry,
        templates: &'a dyn TemplateStore,
    ) -> Self {
        Self {
            project,
            registry,
            templates,
        }
    }

    /// Execute the update operation. With no explicit names, every component
    /// recorded in the manifest is considered.
    pub fn execute(&self, requested: &[String], options: &UpdateOptions) -> Result<()> {
        let targets: Vec<String> = if requested.is_empty() {
            self.project.manifest.installed_components.clone()
        } else {
            requested.to_vec()
        };

        if targets.is_empty() {
            println!("No components installed.");
            return Ok(());
        }

        let (candidates, up_to_date) = self.collect_candidates(&targets)?;

        if candidates.is_empty() {
            if up_to_date > 0 {
                println!("All components are up to date.");
            } else {
                println!("Nothing to update.");
            }
            return Ok(());
        }

        println!("The following component(s) have local changes:");
        for (id, summary) in &candidates {
            println!(
                "  {} {}",
                ui::id_style().apply_to(id),
                ui::dim_style().apply_to(format!(
                    "(+{} -{} block(s))",
                    summary.added_blocks, summary.removed_blocks
                ))
            );
        }

        if !options.yes
            && !ui::confirm(
                "Overwrite these components with the latest templates? Local changes will be lost.",
                false,
            )?
        {
            println!("Aborted. No components updated.");
            return Ok(());
        }

        self.overwrite_components(&candidates)?;

        println!(
            "{} {} component(s) updated.",
            ui::ok_style().apply_to("Done."),
            candidates.len()
        );
        Ok(())
    }

    /// Classify targets; only present-but-modified components are update
    /// candidates. Unknown ids and components missing on disk are reported
    /// and skipped.
    fn collect_candidates(
        &self,
        targets: &[String],
    ) -> Result<(Vec<(String, DiffSummary)>, usize)> {
        let mut unknown = Vec::new();
        let mut missing = Vec::new();
        let mut candidates = Vec::new();
        let mut up_to_date = 0usize;

        for name in targets {
            let id = name.trim().to_lowercase();
            let Some(def) = self.registry.get(&id) else {
                unknown.push(name.clone());
                continue;
            };

            match reconcile::classify(self.project, self.templates, def)? {
                ComponentState::MissingOnDisk => missing.push(id),
                ComponentState::Unmodified => up_to_date += 1,
                ComponentState::Modified(summary) => {
                    if !candidates.iter().any(|(c, _)| c == &id) {
                        candidates.push((id, summary));
                    }
                }
            }
        }

        ui::warn_unknown(&unknown);
        if !missing.is_empty() {
            println!(
                "{} not installed on disk, skipping: {}",
                ui::warn_style().apply_to("Warning:"),
                missing.join(", ")
            );
        }

        Ok((candidates, up_to_date))
    }

    fn overwrite_components(&self, candidates: &[(String, DiffSummary)]) -> Result<()> {
        let total_files: u64 = candidates
            .iter()
            .filter_map(|(id, _)| self.registry.get(id))
            .map(|def| def.files.len() as u64)
            .sum();

        let progress = CopyProgress::new(total_files);

        for (id, _) in candidates {
            let Some(def) = self.registry.get(id) else {
                continue;
            };
            for file in def.files {
                progress.start_file(file);
                let content = reconcile::desired_content(self.project, self.templates, file);
                let written = content
                    .and_then(|c| fsx::write_file(&self.project.component_file(file), &c));
                if let Err(e) = written {
                    progress.abandon();
                    return Err(e);
                }
                progress.file_done();
            }
        }

        progress.finish();
        Ok(())
    }
}
