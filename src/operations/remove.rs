//! Remove operation
//!
//! Deletes a component's files from the project and drops it from the
//! manifest. Installed components that depend on something being removed are
//! reported as likely to break, but are neither removed nor do they block
//! the operation.

use crate::cli::RemoveArgs;
use crate::common::fs as fsx;
use crate::error::Result;
use crate::manifest::Manifest;
use crate::project::Project;
use crate::registry::Registry;
use crate::ui;

/// Configuration options for remove
#[derive(Debug, Clone, Default)]
pub struct RemoveOptions {
    /// Skip confirmation prompt
    pub yes: bool,
}

impl From<&RemoveArgs> for RemoveOptions {
    fn from(args: &RemoveArgs) -> Self {
        Self { yes: args.yes }
    }
}

/// High-level remove operation
pub struct RemoveOperation<'a> {
    project: &'a Project,
    registry: &'a Registry,
}

impl<'a> RemoveOperation<'a> {
    pub fn new(project: &'a Project, registry: &'a Registry) -> Self {
        Self { project, registry }
    }

    /// Execute the remove operation for the requested component names.
    pub fn execute(&self, requested: &[String], options: &RemoveOptions) -> Result<()> {
        let mut unknown = Vec::new();
        let mut not_installed = Vec::new();
        let mut removal_set = Vec::new();

        for name in requested {
            let id = name.trim().to_lowercase();
            let Some(def) = self.registry.get(&id) else {
                unknown.push(name.clone());
                continue;
            };
            let on_disk = def
                .files
                .first()
                .is_some_and(|file| self.project.component_file(file).is_file());
            if on_disk {
                if !removal_set.contains(&id) {
                    removal_set.push(id);
                }
            } else {
                not_installed.push(id);
            }
        }

        ui::warn_unknown(&unknown);
        if !not_installed.is_empty() {
            println!(
                "Not installed, skipping: {}",
                ui::dim_style().apply_to(not_installed.join(", "))
            );
        }

        if removal_set.is_empty() {
            println!("Nothing to remove.");
            return Ok(());
        }

        self.warn_dependents(&removal_set);

        if !options.yes {
            println!("The following component(s) will be removed:");
            for id in &removal_set {
                println!("  {}", ui::id_style().apply_to(id));
            }
            if !ui::confirm("Proceed with removal?", true)? {
                println!("Aborted. No components removed.");
                return Ok(());
            }
        }

        for id in &removal_set {
            self.remove_component(id)?;
        }

        println!(
            "{} {} component(s) removed.",
            ui::ok_style().apply_to("Done."),
            removal_set.len()
        );
        Ok(())
    }

    /// Report installed components that depend on something being removed
    /// and are not themselves being removed. Informational only.
    fn warn_dependents(&self, removal_set: &[String]) {
        let mut dependents = Vec::new();

        for def in self.registry.definitions() {
            if removal_set.iter().any(|id| id == def.id) {
                continue;
            }
            if !self.project.manifest.is_installed(def.id) {
                continue;
            }
            if def
                .component_deps
                .iter()
                .any(|dep| removal_set.iter().any(|id| id == dep))
            {
                dependents.push(def.id);
            }
        }

        if dependents.is_empty() {
            return;
        }

        dependents.sort_unstable();
        println!(
            "{} installed component(s) depend on what you are removing and will likely break: {}",
            ui::warn_style().apply_to("Warning:"),
            dependents.join(", ")
        );
    }

    fn remove_component(&self, id: &str) -> Result<()> {
        let Some(def) = self.registry.get(id) else {
            return Ok(());
        };
        for file in def.files {
            fsx::remove_file_if_exists(&self.project.component_file(file))?;
        }
        Manifest::remove_installed(&self.project.root, id)?;
        Ok(())
    }
}
