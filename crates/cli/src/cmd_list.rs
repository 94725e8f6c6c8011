// SPDX-License-Identifier: MIT
// Copyright (c) 2026 testmap contributors

//! List command implementation: dry run that prints the resolved tags and
//! filter without invoking the test runner.

use testmap::cli::Cli;
use testmap::config::Config;
use testmap::env::{MAPPER_DISABLE, TESTMAP_DEBUG, flag_enabled};
use testmap::error::ExitCode;
use testmap::filter::{BASELINE_TAG, FilterOptions, MATCH_ALL, compose_filter};
use testmap::git;
use testmap::mapping::{MappingCache, MappingSource};
use testmap::resolve::resolve_tags;
use testmap::verbose::VerboseLogger;

/// Run the `list` command.
///
/// Mapping faults propagate: unlike `run`, a dry run reports the broken
/// mapping and exits non-zero instead of pretending everything matched.
pub fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let config = Config::resolve(&cwd, cli);
    let verbose = VerboseLogger::new(config.verbose || flag_enabled(TESTMAP_DEBUG));

    if flag_enabled(MAPPER_DISABLE) {
        println!("mapping disabled via MAPPER_DISABLE");
        println!("filter: {MATCH_ALL}");
        return Ok(ExitCode::Success);
    }

    if let Some(branch) = git::current_branch(&cwd) {
        verbose.log(&format!("current branch: {branch}"));
    }

    let changed = git::detect_changes(&cwd, &config.base_branch, &verbose);
    for file in &changed {
        verbose.log(&format!("changed: {file}"));
    }

    if changed.is_empty() {
        println!("no changes detected against {}", config.base_branch);
        println!("filter: {BASELINE_TAG}");
        return Ok(ExitCode::Success);
    }

    let mut cache = MappingCache::new();
    cache.invalidate();
    let source = MappingSource::Path(config.mappings_file.clone());
    let table = cache.load(&source)?;
    let tags = resolve_tags(&changed, &table, &verbose);

    if tags.is_empty() {
        println!("tags: (none)");
    } else {
        let joined = tags.iter().cloned().collect::<Vec<_>>().join(" ");
        println!("tags: {joined}");
    }

    let filter = compose_filter(
        &tags,
        FilterOptions {
            include_baseline: config.add_baseline,
        },
    );
    println!("filter: {filter}");

    Ok(ExitCode::Success)
}
