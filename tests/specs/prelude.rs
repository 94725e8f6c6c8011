//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::path::Path;
use std::process::Command;

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::{Predicate, PredicateBooleanExt};

/// Returns a Command configured to run the testmap binary
pub fn testmap_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("testmap"))
}

/// Temporary test project directory with helper methods.
pub struct Project {
    dir: tempfile::TempDir,
}

#[allow(dead_code)]
impl Project {
    /// Create an empty project with no files
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Get the project path
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file at the given path (parent directories created automatically)
    pub fn file(&self, path: impl AsRef<Path>, content: &str) {
        let full_path = self.dir.path().join(path.as_ref());
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full_path, content).unwrap();
    }

    /// Write a mapping rules file
    pub fn mappings(&self, content: &str) {
        self.file("test-mappings.json", content);
    }

    /// Write a testmap.config.json
    pub fn config(&self, content: &str) {
        self.file("testmap.config.json", content);
    }
}

// =============================================================================
// GIT TEST HELPERS
// =============================================================================

/// Initialize a git repo with minimal config on the given default branch
pub fn git_init_branch(project: &Project, branch: &str) {
    Command::new("git")
        .args(["init", "-b", branch])
        .current_dir(project.path())
        .output()
        .expect("git init should succeed");

    Command::new("git")
        .args(["config", "user.email", "test@example.com"])
        .current_dir(project.path())
        .output()
        .expect("git config email should succeed");

    Command::new("git")
        .args(["config", "user.name", "Test User"])
        .current_dir(project.path())
        .output()
        .expect("git config name should succeed");
}

/// Initialize a git repo on `main`
pub fn git_init(project: &Project) {
    git_init_branch(project, "main");
}

/// Stage everything and commit
pub fn git_commit_all(project: &Project, message: &str) {
    Command::new("git")
        .args(["add", "."])
        .current_dir(project.path())
        .output()
        .expect("git add should succeed");

    Command::new("git")
        .args(["commit", "-m", message])
        .current_dir(project.path())
        .output()
        .expect("git commit should succeed");
}

/// Create and checkout a feature branch
pub fn git_branch(project: &Project, name: &str) {
    Command::new("git")
        .args(["checkout", "-b", name])
        .current_dir(project.path())
        .output()
        .expect("git checkout -b should succeed");
}
