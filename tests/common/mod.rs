#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the buildlog-guard binary, run inside `dir`.
#[allow(deprecated)] // cargo_bin deprecation - still works fine
pub fn buildlog_guard(dir: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("buildlog-guard").expect("binary should exist");
    cmd.current_dir(dir).env_remove("BUILDLOG_GUARD_LOG");
    cmd
}

/// Temporary working directory holding build logs and config files.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Writes a file with the given content and returns its path.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Writes `build.log` with one entry per line.
    pub fn create_log(&self, lines: &[&str]) -> PathBuf {
        let mut content = lines.join("\n");
        content.push('\n');
        self.create_file("build.log", &content)
    }

    /// Writes `.buildlog-guard.toml` in the fixture root.
    pub fn create_config(&self, content: &str) {
        self.create_file(".buildlog-guard.toml", content);
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn cmd(&self) -> assert_cmd::Command {
        buildlog_guard(self.path())
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Log with one line per category marker.
pub const SCENARIO_LOG: &[&str] = &[
    "Pass: ok",
    "Fail: none",
    "warning: foo",
    "undefined reference: bar",
];

pub const SCENARIO_SUMMARY: &str =
    "Pass:  1\nFail:  1\nWarn:  1\nUnDef: 1\nwarns 1 vs counts 1\n";
