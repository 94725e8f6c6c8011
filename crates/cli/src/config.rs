// SPDX-License-Identifier: MIT
// Copyright (c) 2026 testmap contributors

//! Configuration loading for `testmap.config.json`.
//!
//! The config file is optional and user-owned. A missing or unparseable
//! file falls back to built-in defaults: a broken config must never stop
//! tests from running.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::cli::Cli;

/// Config file looked up in the current working directory.
pub const CONFIG_FILE_NAME: &str = "testmap.config.json";

/// Default mapping rules file, relative to the working directory.
pub const DEFAULT_MAPPINGS_FILE: &str = "test-mappings.json";

/// Default base reference for change detection.
pub const DEFAULT_BASE_BRANCH: &str = "main";

/// Full configuration (camelCase keys on disk, all optional).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Mapping rules file.
    pub mappings_file: PathBuf,

    /// Base branch the current branch is diffed against.
    pub base_branch: String,

    /// Whether the baseline tag is added to every filter.
    pub add_baseline: bool,

    /// Whether per-match diagnostics are printed.
    pub verbose: bool,

    /// Options inserted before passthrough args on the runner command line.
    pub playwright_options: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mappings_file: PathBuf::from(DEFAULT_MAPPINGS_FILE),
            base_branch: DEFAULT_BASE_BRANCH.to_string(),
            add_baseline: true,
            verbose: false,
            playwright_options: Vec::new(),
        }
    }
}

impl Config {
    /// Load config from `dir`, falling back to defaults on any failure.
    pub fn load(dir: &Path) -> Self {
        let path = dir.join(CONFIG_FILE_NAME);
        let Ok(content) = std::fs::read_to_string(&path) else {
            tracing::debug!("no config at {}, using defaults", path.display());
            return Self::default();
        };
        match serde_json::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                tracing::debug!("ignoring malformed config {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Load config from `dir` and apply CLI flag overrides.
    pub fn resolve(dir: &Path, cli: &Cli) -> Self {
        let mut config = Self::load(dir);
        if let Some(base) = &cli.base_branch {
            config.base_branch = base.clone();
        }
        if let Some(path) = &cli.mappings_file {
            config.mappings_file = path.clone();
        }
        if cli.verbose {
            config.verbose = true;
        }
        if cli.no_baseline {
            config.add_baseline = false;
        }
        config
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
