//! Installation manifest (components.json)
//!
//! One manifest per target project, at the project root. It records the
//! project configuration (language flavor, Tailwind paths, write/import
//! aliases) and which components are currently installed.
//!
//! Every mutation is a whole-document read-modify-write: the file is read
//! fresh, changed, and rewritten in full. There is no locking; concurrent
//! invocations against the same project are not supported and the last
//! writer wins. `installed_components` stays sorted and unique.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, VeneerError};

/// Manifest filename, looked up at the project root.
pub const MANIFEST_FILE: &str = "components.json";

/// Tailwind configuration paths, relative to the project root.
///
/// Veneer only passes these through; the scaffolding that writes them is a
/// separate setup step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TailwindPaths {
    pub config: String,
    pub css: String,
}

/// Where component files are written and where the shared utils module is
/// imported from.
///
/// `components` is a directory relative to the project root; `utils` is an
/// import specifier substituted into every copied file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aliases {
    pub components: String,
    pub utils: String,
}

/// The components.json document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Whether the project uses the TypeScript flavor of generated files
    pub typescript: bool,

    pub tailwind: TailwindPaths,

    pub aliases: Aliases,

    /// Installed component ids, sorted and unique
    #[serde(rename = "installedComponents", default)]
    pub installed_components: Vec<String>,
}

impl Manifest {
    /// Path of the manifest for a given project root.
    pub fn path(root: &Path) -> PathBuf {
        root.join(MANIFEST_FILE)
    }

    /// Whether a manifest exists at the given project root.
    pub fn exists(root: &Path) -> bool {
        Self::path(root).is_file()
    }

    /// Load the manifest for a project.
    ///
    /// A missing file and an unparsable file are distinct errors; a document
    /// that fails to parse is never partially trusted.
    pub fn load(root: &Path) -> Result<Self> {
        let path = Self::path(root);
        if !path.is_file() {
            return Err(VeneerError::manifest_missing(root.display()));
        }

        let content = fs::read_to_string(&path).map_err(|e| VeneerError::ManifestReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let mut manifest: Self =
            serde_json::from_str(&content).map_err(|e| VeneerError::ManifestParseFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        manifest.normalize();
        Ok(manifest)
    }

    /// Serialize and write the whole document, replacing any previous one.
    pub fn save(&self, root: &Path) -> Result<()> {
        let path = Self::path(root);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| VeneerError::ManifestWriteFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        }

        let mut json =
            serde_json::to_string_pretty(self).map_err(|e| VeneerError::ManifestWriteFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        json.push('\n');

        fs::write(&path, json).map_err(|e| VeneerError::ManifestWriteFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Whether a component id is recorded as installed.
    pub fn is_installed(&self, id: &str) -> bool {
        self.installed_components.iter().any(|c| c == id)
    }

    /// Record a component as installed.
    ///
    /// Read-modify-write against the file on disk. Returns `true` if the
    /// document changed; calling again with the same id is a no-op and does
    /// not rewrite the file.
    pub fn add_installed(root: &Path, id: &str) -> Result<bool> {
        let mut manifest = Self::load(root)?;
        if manifest.is_installed(id) {
            return Ok(false);
        }
        manifest.installed_components.push(id.to_string());
        manifest.normalize();
        manifest.save(root)?;
        Ok(true)
    }

    /// Remove a component from the installed set. No-op if absent.
    pub fn remove_installed(root: &Path, id: &str) -> Result<bool> {
        let mut manifest = Self::load(root)?;
        let before = manifest.installed_components.len();
        manifest.installed_components.retain(|c| c != id);
        if manifest.installed_components.len() == before {
            return Ok(false);
        }
        manifest.save(root)?;
        Ok(true)
    }

    fn normalize(&mut self) {
        self.installed_components.sort();
        self.installed_components.dedup();
    }
}
