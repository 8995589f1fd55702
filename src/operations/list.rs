//! List operation
//!
//! Lists the registry with install-state markers. Works without a manifest:
//! outside a project everything simply shows as not installed.

use std::collections::BTreeSet;

use crate::cli::ListArgs;
use crate::error::Result;
use crate::registry::Registry;
use crate::ui;

/// Configuration options for list
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Show only installed components
    pub installed: bool,
}

impl From<&ListArgs> for ListOptions {
    fn from(args: &ListArgs) -> Self {
        Self {
            installed: args.installed,
        }
    }
}

/// High-level list operation
pub struct ListOperation<'a> {
    registry: &'a Registry,
    installed: BTreeSet<String>,
}

impl<'a> ListOperation<'a> {
    /// `installed` is the manifest's installed set, or empty when the command
    /// runs outside a project.
    pub fn new(registry: &'a Registry, installed: BTreeSet<String>) -> Self {
        Self {
            registry,
            installed,
        }
    }

    /// Execute the list operation.
    pub fn execute(&self, options: &ListOptions) -> Result<()> {
        let definitions: Vec<_> = self
            .registry
            .definitions()
            .iter()
            .filter(|def| !options.installed || self.installed.contains(def.id))
            .collect();

        if definitions.is_empty() {
            if options.installed {
                println!("No components installed.");
            } else {
                println!("No components available.");
            }
            return Ok(());
        }

        let label = if options.installed {
            "Installed components"
        } else {
            "Components"
        };
        println!("{label} ({}):", definitions.len());

        let width = definitions
            .iter()
            .map(|def| def.id.len())
            .max()
            .unwrap_or(0);

        for def in definitions {
            let marker = if self.installed.contains(def.id) {
                ui::ok_style().apply_to("✔").to_string()
            } else {
                " ".to_string()
            };
            let padded = format!("{:width$}", def.id);
            println!(
                "  {marker} {}  {}",
                ui::id_style().apply_to(padded),
                ui::dim_style().apply_to(def.description),
            );
        }
        Ok(())
    }
}
