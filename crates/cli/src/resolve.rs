// SPDX-License-Identifier: MIT
// Copyright (c) 2026 testmap contributors

//! Tag resolution: changed files × mapping rules.

use std::collections::BTreeSet;

use crate::mapping::MappingTable;
use crate::verbose::VerboseLogger;

/// Resolve the set of tags whose rules match the changed files.
///
/// A file matches a tag when its path starts with any one of the rule's
/// prefixes. This is a plain string-prefix test, not glob or path-segment
/// matching: `"src/ret"` matches `"src/returns/x.ts"`. Rule files written
/// against that behavior depend on it, so it stays.
///
/// One file may contribute to several tags and one tag may accumulate from
/// several files; the result is the deduplicated union. Verbose output
/// gets one `(file -> tag)` line per match and never affects the result.
pub fn resolve_tags(
    changed_files: &[String],
    table: &MappingTable,
    verbose: &VerboseLogger,
) -> BTreeSet<String> {
    let mut tags = BTreeSet::new();
    for file in changed_files {
        for (tag, prefixes) in table {
            if prefixes.iter().any(|prefix| file.starts_with(prefix.as_str())) {
                verbose.matched(file, tag);
                tags.insert(tag.clone());
            }
        }
    }
    tags
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;
