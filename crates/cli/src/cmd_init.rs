// SPDX-License-Identifier: MIT
// Copyright (c) 2026 testmap contributors

//! Implementation of the `testmap init` command.

use std::path::Path;

use anyhow::Result;

use crate::cli::InitArgs;
use crate::config::{CONFIG_FILE_NAME, DEFAULT_MAPPINGS_FILE};
use crate::error::ExitCode;

/// Sample mapping rules written by `init`.
const SAMPLE_MAPPINGS: &str = r#"{
  "@auth": ["src/auth/"],
  "@api": ["src/api/"],
  "@ui": ["src/components/"]
}
"#;

/// Sample configuration written by `init`.
const SAMPLE_CONFIG: &str = r#"{
  "mappingsFile": "test-mappings.json",
  "baseBranch": "main",
  "addBaseline": true,
  "verbose": false,
  "playwrightOptions": []
}
"#;

/// Run the `init` command to scaffold mapping and config files.
pub fn run(args: &InitArgs) -> Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    scaffold(&cwd, args)
}

fn scaffold(dir: &Path, args: &InitArgs) -> Result<ExitCode> {
    let mappings_path = dir.join(DEFAULT_MAPPINGS_FILE);
    let config_path = dir.join(CONFIG_FILE_NAME);

    if !args.force {
        for path in [&mappings_path, &config_path] {
            if path.exists() {
                eprintln!(
                    "{} already exists. Use --force to overwrite.",
                    path.display()
                );
                return Ok(ExitCode::ConfigError);
            }
        }
    }

    std::fs::write(&mappings_path, SAMPLE_MAPPINGS)?;
    println!("Created {}", mappings_path.display());

    std::fs::write(&config_path, SAMPLE_CONFIG)?;
    println!("Created {}", config_path.display());

    println!("Edit the mapping rules, then run `testmap` on a branch.");
    Ok(ExitCode::Success)
}

#[cfg(test)]
#[path = "cmd_init_tests.rs"]
mod tests;
