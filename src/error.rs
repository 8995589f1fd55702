//! Error types and handling for Veneer
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Only genuinely fatal conditions are errors. Unknown component ids and
//! declined confirmations are normal negative outcomes: operations report
//! them and return `Ok` so the process exits zero.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Veneer operations
#[derive(Error, Diagnostic, Debug)]
pub enum VeneerError {
    // Manifest errors
    #[error("No components.json found at: {path}")]
    #[diagnostic(
        code(veneer::manifest::missing),
        help(
            "Veneer commands must be run inside a configured project. Create a components.json manifest at your project root first."
        )
    )]
    ManifestMissing { path: String },

    #[error("Failed to parse components.json: {path}")]
    #[diagnostic(
        code(veneer::manifest::parse_failed),
        help("The manifest is never partially trusted. Fix the JSON or recreate the file.")
    )]
    ManifestParseFailed { path: String, reason: String },

    #[error("Failed to read components.json: {path}")]
    #[diagnostic(code(veneer::manifest::read_failed))]
    ManifestReadFailed { path: String, reason: String },

    #[error("Failed to write components.json: {path}")]
    #[diagnostic(code(veneer::manifest::write_failed))]
    ManifestWriteFailed { path: String, reason: String },

    // Registry errors
    #[error("Invalid component registry: {message}")]
    #[diagnostic(
        code(veneer::registry::invalid),
        help("The registry must be cycle-free and reference only known component ids")
    )]
    RegistryInvalid { message: String },

    #[error("Template '{name}' is missing from the bundled template store")]
    #[diagnostic(code(veneer::registry::template_missing))]
    TemplateMissing { name: String },

    // File system errors
    #[error("Failed to read file: {path}")]
    #[diagnostic(code(veneer::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}")]
    #[diagnostic(code(veneer::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Failed to delete file: {path}")]
    #[diagnostic(code(veneer::fs::delete_failed))]
    FileDeleteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(veneer::fs::io_error))]
    IoError { message: String },
}

impl VeneerError {
    pub fn manifest_missing(path: impl std::fmt::Display) -> Self {
        Self::ManifestMissing {
            path: path.to_string(),
        }
    }

    pub fn file_read(path: impl std::fmt::Display, reason: impl std::fmt::Display) -> Self {
        Self::FileReadFailed {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn file_write(path: impl std::fmt::Display, reason: impl std::fmt::Display) -> Self {
        Self::FileWriteFailed {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn file_delete(path: impl std::fmt::Display, reason: impl std::fmt::Display) -> Self {
        Self::FileDeleteFailed {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl From<std::io::Error> for VeneerError {
    fn from(err: std::io::Error) -> Self {
        VeneerError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for VeneerError {
    fn from(err: serde_json::Error) -> Self {
        VeneerError::ManifestParseFailed {
            path: crate::manifest::MANIFEST_FILE.to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for VeneerError {
    fn from(err: inquire::InquireError) -> Self {
        VeneerError::IoError {
            message: format!("Failed to read confirmation: {err}"),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, VeneerError>;
