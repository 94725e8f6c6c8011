// SPDX-License-Identifier: MIT
// Copyright (c) 2026 testmap contributors

//! Test runner invocation.
//!
//! Executes Playwright via the shell with inherited standard streams so
//! the runner owns the terminal. Failures never raise past this boundary;
//! every outcome is a [`RunOutcome`] that translates to an exit code.

use std::process::Command;

/// Fixed test-runner invocation the filter and passthrough args extend.
pub const RUNNER_COMMAND: &str = "npx playwright test";

/// Structured result of a runner invocation.
#[derive(Debug)]
pub enum RunOutcome {
    /// Runner exited with a status code.
    Exited(i32),
    /// Runner was terminated without a status (e.g. by a signal).
    Terminated,
    /// Runner process could not be spawned.
    SpawnFailed(std::io::Error),
}

impl RunOutcome {
    /// Integer exit status: the runner's own code, defaulting to 1 when
    /// the failure carries no status.
    pub fn exit_code(&self) -> i32 {
        match self {
            RunOutcome::Exited(code) => *code,
            RunOutcome::Terminated | RunOutcome::SpawnFailed(_) => 1,
        }
    }
}

/// Single-quote a string for the POSIX shell.
fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', r"'\''"))
}

/// Build the full runner command line.
///
/// The filter is quoted to survive shell tokenization (alternations
/// contain `|`); extra args are appended verbatim and in order.
fn build_command_line(filter: &str, extra_args: &[String]) -> String {
    let mut command_line = format!("{} --grep {}", RUNNER_COMMAND, shell_quote(filter));
    for arg in extra_args {
        command_line.push(' ');
        command_line.push_str(arg);
    }
    command_line
}

/// Run the test runner with the given filter and passthrough args.
///
/// Blocks until the runner exits; stdio is inherited.
pub fn run_tests(filter: &str, extra_args: &[String]) -> RunOutcome {
    let command_line = build_command_line(filter, extra_args);
    tracing::debug!("invoking test runner: {command_line}");

    let status = if cfg!(target_os = "windows") {
        Command::new("cmd").args(["/C", &command_line]).status()
    } else {
        Command::new("sh").args(["-c", &command_line]).status()
    };

    match status {
        Ok(status) => match status.code() {
            Some(code) => RunOutcome::Exited(code),
            None => RunOutcome::Terminated,
        },
        Err(e) => RunOutcome::SpawnFailed(e),
    }
}

#[cfg(test)]
#[path = "invoke_tests.rs"]
mod tests;
