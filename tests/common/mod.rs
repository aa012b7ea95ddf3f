//! Common test utilities for modpack integration tests

#![allow(dead_code)]

use assert_cmd::Command;
use flate2::read::GzDecoder;
use std::collections::BTreeSet;
use std::path::PathBuf;
use tempfile::TempDir;

/// Lint configuration running a shell stand-in for the real linter
///
/// Flags every line containing `@@`, in unix reporter format.
pub const FAKE_LINTER_CONFIG: &str = r#"lint:
  command:
    - sh
    - -c
    - |-
      awk '/@@/ { print "stdin:" NR ":1: Unexpected marker." }'
    - fake-lint
"#;

/// A temporary directory holding source roots and the archive
pub struct TestWorkspace {
    pub temp: TempDir,
    pub path: PathBuf,
}

impl TestWorkspace {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Check if a file exists in workspace
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    pub fn join(&self, path: &str) -> PathBuf {
        self.path.join(path)
    }

    /// Lay out a root with one module tree and one bundle
    pub fn create_shop_root(&self, root: &str) {
        self.write_file(&format!("{root}/shop/module.json"), "{}");
        self.write_file(&format!("{root}/shop/boot.js"), "boot();");
        self.write_file(&format!("{root}/shop/config/settings.js"), "({ a: 1 })");
        self.write_file(&format!("{root}/shop/classes/Cart.js"), "class Cart {}");
        self.write_file(&format!("{root}/shop/public/logo.svg"), "<svg/>");
        self.write_file(&format!("{root}/shop/catalog/module.json"), "{}");
        self.write_file(
            &format!("{root}/shop/catalog/classes/Listing.js"),
            "class Listing {}",
        );
        self.write_file(&format!("{root}/bundles/app.js"), "({ name: 'app' })");
    }

    /// Entry paths of an archive in the workspace
    pub fn archive_entries(&self, path: &str) -> BTreeSet<String> {
        let file = std::fs::File::open(self.path.join(path)).expect("Failed to open archive");
        let mut archive = tar::Archive::new(GzDecoder::new(file));
        archive
            .entries()
            .expect("Failed to read archive")
            .map(|entry| {
                entry
                    .expect("Failed to read entry")
                    .path()
                    .expect("Entry without path")
                    .to_string_lossy()
                    .into_owned()
            })
            .collect()
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// The modpack binary, run from `dir` with logging forced off
#[allow(deprecated)]
pub fn modpack_cmd(dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("modpack").expect("binary is built");
    cmd.current_dir(dir)
        .env_remove("MODPACK_CONFIG")
        .env("MODPACK_LOG", "off");
    cmd
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_file_operations() {
        let workspace = TestWorkspace::new();
        workspace.write_file("a/b/c.txt", "hello");
        assert!(workspace.file_exists("a/b/c.txt"));
    }
}
