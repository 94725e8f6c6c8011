// SPDX-License-Identifier: MIT
// Copyright (c) 2026 testmap contributors

//! Filter composition: tag set to runner `--grep` expression.

use std::collections::BTreeSet;

/// Reserved tag for the always-relevant smoke set.
pub const BASELINE_TAG: &str = "@smoke";

/// Match-everything filter used by the disable bypass and the
/// mapping-fault fallback. Those paths hand-build their filter and do not
/// go through [`compose_filter`].
pub const MATCH_ALL: &str = ".*";

/// Composition options.
#[derive(Debug, Clone, Copy)]
pub struct FilterOptions {
    /// Add [`BASELINE_TAG`] to the filter when absent (default true).
    pub include_baseline: bool,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            include_baseline: true,
        }
    }
}

/// Compose a runner filter expression from a tag set.
///
/// Tags are emitted in sorted order with the baseline tag appended last
/// when the policy adds it. The result is a regex OR group, e.g.
/// `(@api|@auth|@smoke)`. When the set ends up empty (baseline disabled,
/// nothing matched) the baseline tag alone is returned: the filter is
/// never an empty expression.
///
/// Pure and deterministic; no I/O.
pub fn compose_filter(tags: &BTreeSet<String>, options: FilterOptions) -> String {
    let mut parts: Vec<&str> = tags.iter().map(String::as_str).collect();
    if options.include_baseline && !tags.contains(BASELINE_TAG) {
        parts.push(BASELINE_TAG);
    }
    if parts.is_empty() {
        return BASELINE_TAG.to_string();
    }
    format!("({})", parts.join("|"))
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
