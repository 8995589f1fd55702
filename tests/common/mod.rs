//! Common test utilities for Veneer integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// A target project for integration tests
#[allow(dead_code)]
pub struct TestProject {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to project root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestProject {
    /// Create a new empty test project
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a default components.json manifest at the project root
    pub fn init_manifest(&self) {
        self.write_file(
            "components.json",
            r#"{
  "typescript": true,
  "tailwind": {
    "config": "tailwind.config.js",
    "css": "src/app/globals.css"
  },
  "aliases": {
    "components": "src/components",
    "utils": "~/lib/utils"
  },
  "installedComponents": []
}
"#,
        );
    }

    /// Write a file in the project
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the project
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in the project
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Append a line to an existing file
    pub fn append_line(&self, path: &str, line: &str) {
        let mut content = self.read_file(path);
        content.push_str(line);
        content.push('\n');
        self.write_file(path, &content);
    }

    /// Parse the manifest and return the installed component ids
    pub fn installed(&self) -> Vec<String> {
        let manifest: serde_json::Value =
            serde_json::from_str(&self.read_file("components.json"))
                .expect("Failed to parse manifest");
        manifest["installedComponents"]
            .as_array()
            .map(|list| {
                list.iter()
                    .filter_map(|v| v.as_str().map(String::from))
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Build a veneer command running inside the given project directory
pub fn veneer_cmd(project: &Path) -> Command {
    let mut cmd = Command::cargo_bin("veneer").expect("Failed to find veneer binary");
    cmd.current_dir(project);
    cmd.env_remove("VENEER_PROJECT");
    cmd
}
