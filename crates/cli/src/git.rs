// SPDX-License-Identifier: MIT
// Copyright (c) 2026 testmap contributors

//! Git utilities for change detection.
//!
//! Uses git2 (libgit2) for all git operations. The changed-file set is the
//! `base...HEAD` three-dot range: files touched by commits unique to the
//! current branch since it diverged from the base reference, computed as a
//! diff between the merge-base tree and the HEAD tree.
//!
//! Change detection fails open: any git fault (missing base ref, not a
//! repository, unborn HEAD) is reported as "no detectable changes" so that
//! local misconfiguration never blocks test execution.

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::Context;
use git2::Repository;

use crate::verbose::VerboseLogger;

/// Extract file path from a diff delta.
///
/// For deleted files, `new_file().path()` is `None`, so fall back to
/// `old_file()`.
fn extract_path<'a>(delta: &'a git2::DiffDelta<'a>) -> Option<&'a Path> {
    delta.new_file().path().or_else(|| delta.old_file().path())
}

/// Branch shorthand of HEAD, informational only.
pub fn current_branch(root: &Path) -> Option<String> {
    let repo = Repository::discover(root).ok()?;
    let head = repo.head().ok()?;
    head.shorthand().map(|s| s.to_string())
}

/// Repo-relative paths changed in the `base...HEAD` range.
///
/// Deduplicated; empty when the branch has no commits of its own.
pub fn changed_files(root: &Path, base: &str) -> anyhow::Result<Vec<String>> {
    let repo = Repository::discover(root).context("failed to open repository")?;

    let base_oid = repo
        .revparse_single(base)
        .with_context(|| format!("failed to resolve base ref: {}", base))?
        .peel_to_commit()
        .context("base ref is not a commit")?
        .id();
    let head_oid = repo
        .head()
        .context("failed to get HEAD")?
        .target()
        .ok_or_else(|| anyhow::anyhow!("HEAD has no target"))?;

    let merge_base = repo
        .merge_base(base_oid, head_oid)
        .with_context(|| format!("no merge base between {} and HEAD", base))?;
    let base_tree = repo.find_commit(merge_base)?.tree()?;
    let head_tree = repo.find_commit(head_oid)?.tree()?;

    let diff = repo.diff_tree_to_tree(Some(&base_tree), Some(&head_tree), None)?;

    let mut files = BTreeSet::new();
    for delta in diff.deltas() {
        if let Some(path) = extract_path(&delta) {
            files.insert(path.to_string_lossy().into_owned());
        }
    }

    Ok(files.into_iter().collect())
}

/// Fail-open change detection.
///
/// Any git fault yields an empty change set; the cause is only observable
/// through verbose/tracing diagnostics.
pub fn detect_changes(root: &Path, base: &str, verbose: &VerboseLogger) -> Vec<String> {
    match changed_files(root, base) {
        Ok(files) => files,
        Err(e) => {
            tracing::debug!("change detection failed: {e:#}");
            verbose.log(&format!(
                "change detection against {} failed ({}); treating as no changes",
                base, e
            ));
            Vec::new()
        }
    }
}

#[cfg(test)]
#[path = "git_tests.rs"]
mod tests;
