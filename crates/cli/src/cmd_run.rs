// SPDX-License-Identifier: MIT
// Copyright (c) 2026 testmap contributors

//! Run command implementation: the full detect → map → filter → invoke
//! pipeline. Exits with the test runner's own status code.

use std::path::Path;

use testmap::cli::{Cli, RunArgs};
use testmap::config::Config;
use testmap::env::{MAPPER_DISABLE, TESTMAP_DEBUG, flag_enabled};
use testmap::filter::{BASELINE_TAG, FilterOptions, MATCH_ALL, compose_filter};
use testmap::git;
use testmap::invoke::{self, RunOutcome};
use testmap::mapping::{MappingCache, MappingSource};
use testmap::resolve::resolve_tags;
use testmap::verbose::VerboseLogger;

/// Run the `run` command.
pub fn run(cli: &Cli, args: &RunArgs) -> anyhow::Result<i32> {
    let cwd = std::env::current_dir()?;
    let config = Config::resolve(&cwd, cli);
    let verbose = VerboseLogger::new(config.verbose || flag_enabled(TESTMAP_DEBUG));

    let filter = select_filter(&cwd, &config, &verbose);
    verbose.log(&format!("filter: {filter}"));

    let mut runner_args = config.playwright_options.clone();
    runner_args.extend(args.runner_args.iter().cloned());

    let outcome = invoke::run_tests(&filter, &runner_args);
    if let RunOutcome::SpawnFailed(e) = &outcome {
        eprintln!("testmap: failed to start test runner: {e}");
    }
    Ok(outcome.exit_code())
}

/// Select the runner filter for the working directory.
///
/// Faults in the mapping layer are downgraded to a diagnostic plus the
/// match-all filter: a broken mapping must never prevent tests from
/// running. The disable bypass and the empty-change baseline path are two
/// distinct hand-built filters that skip the composer.
fn select_filter(cwd: &Path, config: &Config, verbose: &VerboseLogger) -> String {
    if flag_enabled(MAPPER_DISABLE) {
        verbose.log("mapping disabled via MAPPER_DISABLE; running everything");
        return MATCH_ALL.to_string();
    }

    if let Some(branch) = git::current_branch(cwd) {
        verbose.log(&format!("current branch: {branch}"));
    }

    let changed = git::detect_changes(cwd, &config.base_branch, verbose);
    if changed.is_empty() {
        // Mapping rules are not consulted at all on this path.
        verbose.log("no changes detected; running the baseline set");
        return BASELINE_TAG.to_string();
    }

    let mut cache = MappingCache::new();
    cache.invalidate();
    let source = MappingSource::Path(config.mappings_file.clone());
    match cache.load(&source) {
        Ok(table) => {
            let tags = resolve_tags(&changed, &table, verbose);
            compose_filter(
                &tags,
                FilterOptions {
                    include_baseline: config.add_baseline,
                },
            )
        }
        Err(e) => {
            eprintln!("testmap: {e}; running all tests");
            MATCH_ALL.to_string()
        }
    }
}

#[cfg(test)]
#[path = "cmd_run_tests.rs"]
mod tests;
