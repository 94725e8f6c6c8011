// SPDX-License-Identifier: MIT
// Copyright (c) 2026 testmap contributors

//! Unit tests for change detection.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::process::Command;

use tempfile::TempDir;

use super::*;

// =============================================================================
// TEST HELPERS
// =============================================================================

/// Initialize a git repository with a `main` default branch.
fn init_git_repo(temp: &TempDir) {
    Command::new("git")
        .args(["init", "-b", "main"])
        .current_dir(temp.path())
        .output()
        .expect("Failed to init git repo");

    Command::new("git")
        .args(["config", "user.email", "test@example.com"])
        .current_dir(temp.path())
        .output()
        .expect("Failed to configure git email");

    Command::new("git")
        .args(["config", "user.name", "Test User"])
        .current_dir(temp.path())
        .output()
        .expect("Failed to configure git name");
}

fn git_add(temp: &TempDir, file: &str) {
    Command::new("git")
        .args(["add", file])
        .current_dir(temp.path())
        .output()
        .expect("Failed to git add");
}

fn git_commit(temp: &TempDir, message: &str) {
    Command::new("git")
        .args(["commit", "-m", message])
        .current_dir(temp.path())
        .output()
        .expect("Failed to git commit");
}

fn git_checkout_b(temp: &TempDir, branch: &str) {
    Command::new("git")
        .args(["checkout", "-b", branch])
        .current_dir(temp.path())
        .output()
        .expect("Failed to create branch");
}

fn git_checkout(temp: &TempDir, branch: &str) {
    Command::new("git")
        .args(["checkout", branch])
        .current_dir(temp.path())
        .output()
        .expect("Failed to checkout branch");
}

fn create_initial_commit(temp: &TempDir) {
    std::fs::write(temp.path().join("README.md"), "# Project\n").unwrap();
    git_add(temp, "README.md");
    git_commit(temp, "chore: initial commit");
}

fn commit_file(temp: &TempDir, filename: &str, content: &str) {
    let full_path = temp.path().join(filename);
    if let Some(parent) = full_path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(full_path, content).unwrap();
    git_add(temp, filename);
    git_commit(temp, "feat: change");
}

fn quiet() -> VerboseLogger {
    VerboseLogger::new(false)
}

// =============================================================================
// CHANGED_FILES TESTS
// =============================================================================

#[test]
fn changed_files_lists_branch_commits() {
    let temp = TempDir::new().unwrap();
    init_git_repo(&temp);
    create_initial_commit(&temp);

    git_checkout_b(&temp, "feature");
    commit_file(&temp, "src/auth/login.ts", "export {}\n");

    let files = changed_files(temp.path(), "main").unwrap();
    assert_eq!(files, ["src/auth/login.ts"]);
}

#[test]
fn changed_files_are_repo_relative() {
    let temp = TempDir::new().unwrap();
    init_git_repo(&temp);
    create_initial_commit(&temp);

    git_checkout_b(&temp, "feature");
    commit_file(&temp, "src/api/users.ts", "export {}\n");

    let files = changed_files(temp.path(), "main").unwrap();
    assert_eq!(files, ["src/api/users.ts"]);
    assert!(!files[0].starts_with('/'));
}

#[test]
fn changed_files_excludes_base_advance_after_divergence() {
    let temp = TempDir::new().unwrap();
    init_git_repo(&temp);
    create_initial_commit(&temp);

    git_checkout_b(&temp, "feature");
    commit_file(&temp, "feature.txt", "feature\n");

    // Advance main past the divergence point.
    git_checkout(&temp, "main");
    commit_file(&temp, "mainline.txt", "main\n");
    git_checkout(&temp, "feature");

    // Three-dot semantics: only the branch's own changes count.
    let files = changed_files(temp.path(), "main").unwrap();
    assert_eq!(files, ["feature.txt"]);
}

#[test]
fn changed_files_deduplicates_repeated_touches() {
    let temp = TempDir::new().unwrap();
    init_git_repo(&temp);
    create_initial_commit(&temp);

    git_checkout_b(&temp, "feature");
    commit_file(&temp, "src/api/users.ts", "v1\n");
    commit_file(&temp, "src/api/users.ts", "v2\n");

    let files = changed_files(temp.path(), "main").unwrap();
    assert_eq!(files, ["src/api/users.ts"]);
}

#[test]
fn changed_files_includes_deleted_files() {
    let temp = TempDir::new().unwrap();
    init_git_repo(&temp);
    create_initial_commit(&temp);

    git_checkout_b(&temp, "feature");
    std::fs::remove_file(temp.path().join("README.md")).unwrap();
    git_add(&temp, "README.md");
    git_commit(&temp, "chore: delete readme");

    let files = changed_files(temp.path(), "main").unwrap();
    assert_eq!(files, ["README.md"]);
}

#[test]
fn changed_files_ignores_uncommitted_edits() {
    let temp = TempDir::new().unwrap();
    init_git_repo(&temp);
    create_initial_commit(&temp);

    git_checkout_b(&temp, "feature");
    std::fs::write(temp.path().join("README.md"), "# Modified\n").unwrap();

    // The range covers commits only; the worktree edit is invisible.
    let files = changed_files(temp.path(), "main").unwrap();
    assert!(files.is_empty());
}

#[test]
fn changed_files_empty_when_branch_has_no_commits() {
    let temp = TempDir::new().unwrap();
    init_git_repo(&temp);
    create_initial_commit(&temp);

    git_checkout_b(&temp, "feature");

    let files = changed_files(temp.path(), "main").unwrap();
    assert!(files.is_empty());
}

#[test]
fn changed_files_invalid_base_errors() {
    let temp = TempDir::new().unwrap();
    init_git_repo(&temp);
    create_initial_commit(&temp);

    let result = changed_files(temp.path(), "nonexistent");
    assert!(result.is_err());
}

#[test]
fn changed_files_outside_repo_errors() {
    let temp = TempDir::new().unwrap();

    let result = changed_files(temp.path(), "main");
    assert!(result.is_err());
}

// =============================================================================
// DETECT_CHANGES (FAIL-OPEN) TESTS
// =============================================================================

#[test]
fn detect_changes_outside_repo_is_empty() {
    let temp = TempDir::new().unwrap();

    let files = detect_changes(temp.path(), "main", &quiet());
    assert!(files.is_empty());
}

#[test]
fn detect_changes_invalid_base_is_empty() {
    let temp = TempDir::new().unwrap();
    init_git_repo(&temp);
    create_initial_commit(&temp);

    let files = detect_changes(temp.path(), "nonexistent", &quiet());
    assert!(files.is_empty());
}

#[test]
fn detect_changes_passes_through_real_changes() {
    let temp = TempDir::new().unwrap();
    init_git_repo(&temp);
    create_initial_commit(&temp);

    git_checkout_b(&temp, "feature");
    commit_file(&temp, "src/auth/login.ts", "export {}\n");

    let files = detect_changes(temp.path(), "main", &quiet());
    assert_eq!(files, ["src/auth/login.ts"]);
}

// =============================================================================
// CURRENT_BRANCH TESTS
// =============================================================================

#[test]
fn current_branch_returns_branch_name() {
    let temp = TempDir::new().unwrap();
    init_git_repo(&temp);
    create_initial_commit(&temp);

    git_checkout_b(&temp, "feature");

    assert_eq!(current_branch(temp.path()).as_deref(), Some("feature"));
}

#[test]
fn current_branch_outside_repo_is_none() {
    let temp = TempDir::new().unwrap();

    assert!(current_branch(temp.path()).is_none());
}
