//! Add operation
//!
//! Resolves the requested components plus their internal dependencies,
//! reconciles against what is already on disk, copies transformed templates
//! into the project, and records each component in the manifest.

use crate::cli::AddArgs;
use crate::error::Result;
use crate::manifest::Manifest;
use crate::progress::CopyProgress;
use crate::project::Project;
use crate::reconcile;
use crate::registry::{Registry, TemplateStore};
use crate::resolver;
use crate::ui;

/// Configuration options for add
#[derive(Debug, Clone, Default)]
pub struct AddOptions {
    /// Skip confirmation prompts
    pub yes: bool,
    /// Add every component in the registry
    pub all: bool,
    /// Overwrite files that already exist without asking
    pub overwrite: bool,
}

impl From<&AddArgs> for AddOptions {
    fn from(args: &AddArgs) -> Self {
        Self {
            yes: args.yes,
            all: args.all,
            overwrite: args.overwrite,
        }
    }
}

/// High-level add operation
pub struct AddOperation<'a> {
    project: &'a Project,
    registry: &'a Registry,
    templates: &'a dyn TemplateStore,
}

impl<'a> AddOperation<'a> {
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

    /// Execute the add operation for the requested component names.
    pub fn execute(&self, requested: &[String], options: &AddOptions) -> Result<()> {
        let requested: Vec<String> = if options.all {
            self.registry.ids().map(String::from).collect()
        } else {
            requested.to_vec()
        };

        if requested.is_empty() {
            println!("No components requested. Pass component names or --all.");
            return Ok(());
        }

        let resolution = resolver::resolve(self.registry, &requested);
        ui::warn_unknown(&resolution.unknown);

        if resolution.is_empty() {
            println!("No components to add.");
            return Ok(());
        }

        let action_set = self.confirm_action_set(&resolution.components, options)?;
        if action_set.is_empty() {
            println!("Nothing to install.");
            return Ok(());
        }

        self.copy_components(&action_set)?;

        println!(
            "{} {} component(s) added.",
            ui::ok_style().apply_to("Done."),
            action_set.len()
        );

        let packages = resolver::package_deps_for(self.registry, &action_set);
        if !packages.is_empty() {
            println!();
            println!("Install the required packages with your package manager:");
            for package in &packages {
                println!("  {}", ui::dim_style().apply_to(package));
            }
        }

        Ok(())
    }

    /// Partition the resolved set by disk presence and, when files would be
    /// overwritten without an explicit go-ahead, ask first. Declining narrows
    /// the action set to components not yet on disk.
    fn confirm_action_set(
        &self,
        resolved: &[String],
        options: &AddOptions,
    ) -> Result<Vec<String>> {
        // Disk presence is authoritative here; the manifest is not consulted
        let (existing, fresh): (Vec<String>, Vec<String>) =
            resolved.iter().cloned().partition(|id| {
                self.registry
                    .get(id)
                    .and_then(|def| def.files.first())
                    .is_some_and(|file| self.project.component_file(file).is_file())
            });

        if existing.is_empty() || options.overwrite || options.yes {
            return Ok(resolved.to_vec());
        }

        println!("The following component(s) already exist in your project:");
        for id in &existing {
            println!("  {}", ui::id_style().apply_to(id));
        }

        if ui::confirm("Overwrite existing components?", false)? {
            Ok(resolved.to_vec())
        } else {
            Ok(fresh)
        }
    }

    /// Copy every file of every component, then mark each as installed.
    ///
    /// A failed write aborts the whole command: remaining files of that
    /// component are not attempted, files already written stay, and the
    /// manifest entry for the failed component is never added.
    fn copy_components(&self, action_set: &[String]) -> Result<()> {
        let total_files: u64 = action_set
            .iter()
            .filter_map(|id| self.registry.get(id))
            .map(|def| def.files.len() as u64)
            .sum();

        let progress = CopyProgress::new(total_files);

        for id in action_set {
            let Some(def) = self.registry.get(id) else {
                continue;
            };
            for file in def.files {
                progress.start_file(file);
                let content = reconcile::desired_content(self.project, self.templates, file);
                let written = content
                    .and_then(|c| crate::common::fs::write_file(&self.project.component_file(file), &c));
                if let Err(e) = written {
                    progress.abandon();
                    return Err(e);
                }
                progress.file_done();
            }
            Manifest::add_installed(&self.project.root, id)?;
        }

        progress.finish();
        Ok(())
    }
}
