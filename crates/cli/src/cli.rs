// SPDX-License-Identifier: MIT
// Copyright (c) 2026 testmap contributors

//! CLI argument parsing with clap derive.
//!
//! Testmap's own flags are global and go before the subcommand; every
//! token after `run` is handed to the test runner untouched.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Runs the Playwright tests affected by your branch changes
#[derive(Parser)]
#[command(name = "testmap")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base branch to diff against (overrides config)
    #[arg(short = 'b', long = "base-branch", global = true, value_name = "REF")]
    pub base_branch: Option<String>,

    /// Mapping rules file (overrides config)
    #[arg(
        short = 'm',
        long = "mappings-file",
        global = true,
        value_name = "PATH"
    )]
    pub mappings_file: Option<PathBuf>,

    /// Print per-match diagnostics to stderr
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Do not add the baseline tag to the filter
    #[arg(long = "no-baseline", global = true)]
    pub no_baseline: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Detect changes, resolve tags, and run the selected tests (default)
    Run(RunArgs),
    /// Print the resolved tags and filter without running tests
    List,
    /// Scaffold sample mapping and config files
    Init(InitArgs),
}

#[derive(clap::Args, Default)]
pub struct RunArgs {
    /// Extra arguments passed through to the test runner verbatim
    #[arg(
        value_name = "RUNNER_ARGS",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub runner_args: Vec<String>,
}

#[derive(clap::Args)]
pub struct InitArgs {
    /// Overwrite existing files
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
