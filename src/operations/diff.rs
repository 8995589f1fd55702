//! Diff operation (read-only)
//!
//! With a component name: a full two-color annotated line diff between the
//! freshly transformed template and the local files. Without one: a one-line
//! status for every component recorded in the manifest.

use crate::error::Result;
use crate::project::Project;
use crate::reconcile::{self, ComponentState, DiffLine};
use crate::registry::{ComponentDefinition, Registry, TemplateStore};
use crate::ui;

/// High-level diff operation
pub struct DiffOperation<'a> {
    project: &'a Project,
    registry: &'a Registry,
    templates: &'a dyn TemplateStore,
}

impl<'a> DiffOperation<'a> {
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

    /// Execute the diff operation, detailed for one component or summarized
    /// over the whole installed set.
    pub fn execute(&self, component: Option<&str>) -> Result<()> {
        match component {
            Some(name) => self.diff_single(name),
            None => self.diff_all(),
        }
    }

    fn diff_single(&self, name: &str) -> Result<()> {
        let id = name.trim().to_lowercase();
        let Some(def) = self.registry.get(&id) else {
            ui::warn_unknown(std::slice::from_ref(&name.to_string()));
            return Ok(());
        };

        match reconcile::classify(self.project, self.templates, def)? {
            ComponentState::MissingOnDisk => {
                println!("'{id}' is not installed.");
            }
            ComponentState::Unmodified => {
                println!("'{id}' is {}.", ui::ok_style().apply_to("up to date"));
            }
            ComponentState::Modified(_) => {
                self.render_file_diffs(def)?;
            }
        }
        Ok(())
    }

    fn render_file_diffs(&self, def: &ComponentDefinition) -> Result<()> {
        for file in def.files {
            let desired = reconcile::desired_content(self.project, self.templates, file)?;
            let path = self.project.component_file(file);
            let local = if path.is_file() {
                std::fs::read_to_string(&path)
                    .map_err(|e| crate::error::VeneerError::file_read(path.display(), e))?
            } else {
                String::new()
            };

            if desired.trim() == local.trim() {
                continue;
            }

            println!("{}", ui::id_style().apply_to(file));
            for change in reconcile::diff::line_changes(desired.trim(), local.trim()) {
                match change {
                    DiffLine::Added(line) => {
                        println!("{}", ui::ok_style().apply_to(format!("+ {line}")));
                    }
                    DiffLine::Removed(line) => {
                        println!(
                            "{}",
                            console::Style::new().red().apply_to(format!("- {line}"))
                        );
                    }
                    DiffLine::Context(line) => println!("  {line}"),
                }
            }
            println!();
        }
        Ok(())
    }

    fn diff_all(&self) -> Result<()> {
        let installed = &self.project.manifest.installed_components;
        if installed.is_empty() {
            println!("No components installed.");
            return Ok(());
        }

        for id in installed {
            let Some(def) = self.registry.get(id) else {
                println!(
                    "  {id} {}",
                    ui::warn_style().apply_to("(not in registry)")
                );
                continue;
            };

            match reconcile::classify(self.project, self.templates, def)? {
                ComponentState::MissingOnDisk => {
                    println!("  {id} {}", ui::warn_style().apply_to("missing on disk"));
                }
                ComponentState::Unmodified => {
                    println!("  {id} {}", ui::ok_style().apply_to("up to date"));
                }
                ComponentState::Modified(summary) => {
                    println!(
                        "  {id} {}",
                        ui::warn_style().apply_to(format!(
                            "modified (+{} -{} block(s))",
                            summary.added_blocks, summary.removed_blocks
                        ))
                    );
                }
            }
        }
        Ok(())
    }
}
