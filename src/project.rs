//! Target project discovery and access
//!
//! A project is any directory containing a components.json manifest. Commands
//! search upward from the start directory, so they work from anywhere inside
//! the project tree.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::manifest::Manifest;

/// An opened target project: its root directory and the manifest loaded
/// from it.
///
/// The manifest snapshot is read once per process; mutations go through the
/// read-modify-write helpers on [`Manifest`] and re-read the file.
#[derive(Debug)]
pub struct Project {
    /// Directory containing components.json
    pub root: PathBuf,

    /// Manifest as loaded when the project was opened
    pub manifest: Manifest,
}

impl Project {
    /// Detect whether a project exists at the given root.
    pub fn exists(root: &Path) -> bool {
        Manifest::exists(root)
    }

    /// Find a project root by searching upward from the given path.
    pub fn find_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();

        loop {
            if Self::exists(&current) {
                return Some(current);
            }

            if !current.pop() {
                return None;
            }
        }
    }

    /// Open the project at the given root, loading its manifest.
    pub fn open(root: &Path) -> Result<Self> {
        let manifest = Manifest::load(root)?;
        let root = dunce::canonicalize(root).unwrap_or_else(|_| root.to_path_buf());
        Ok(Self { root, manifest })
    }

    /// The directory installed component files are written to.
    pub fn components_dir(&self) -> PathBuf {
        self.root.join(&self.manifest.aliases.components)
    }

    /// Absolute path of one component file inside this project.
    pub fn component_file(&self, relative: &str) -> PathBuf {
        self.components_dir().join(relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::{Aliases, TailwindPaths};
    use tempfile::TempDir;

    fn write_manifest(root: &Path) {
        Manifest {
            typescript: true,
            tailwind: TailwindPaths {
                config: "tailwind.config.js".to_string(),
                css: "src/app/globals.css".to_string(),
            },
            aliases: Aliases {
                components: "src/components".to_string(),
                utils: "~/lib/utils".to_string(),
            },
            installed_components: vec![],
        }
        .save(root)
        .unwrap();
    }

    #[test]
    fn test_find_from_project_root() {
        let temp = TempDir::new().unwrap();
        write_manifest(temp.path());

        let found = Project::find_from(temp.path()).unwrap();
        assert_eq!(found, temp.path());
    }

    #[test]
    fn test_find_from_nested_directory() {
        let temp = TempDir::new().unwrap();
        write_manifest(temp.path());
        let nested = temp.path().join("src/app/settings");
        std::fs::create_dir_all(&nested).unwrap();

        let found = Project::find_from(&nested).unwrap();
        assert_eq!(found, temp.path());
    }

    #[test]
    fn test_find_from_outside_any_project() {
        let temp = TempDir::new().unwrap();
        assert!(Project::find_from(temp.path()).is_none());
    }

    #[test]
    fn test_component_file_joins_alias() {
        let temp = TempDir::new().unwrap();
        write_manifest(temp.path());

        let project = Project::open(temp.path()).unwrap();
        let path = project.component_file("ui/button.tsx");
        assert!(path.ends_with("src/components/ui/button.tsx"));
    }
}
