// SPDX-License-Identifier: MIT
// Copyright (c) 2026 testmap contributors

//! Testmap CLI entry point.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use testmap::cli::{Cli, Command, RunArgs};
use testmap::env::TESTMAP_LOG;
use testmap::error::ExitCode;

mod cmd_list;
mod cmd_run;

fn init_logging() {
    let filter = EnvFilter::try_from_env(TESTMAP_LOG).unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("testmap: {}", e);
            match e.downcast_ref::<testmap::Error>() {
                Some(err) => ExitCode::from(err) as i32,
                None => ExitCode::InternalError as i32,
            }
        }
    };

    std::process::exit(exit_code);
}

fn run() -> anyhow::Result<i32> {
    let cli = Cli::parse();

    match &cli.command {
        // Bare invocation runs the full pipeline
        None => cmd_run::run(&cli, &RunArgs::default()),
        Some(Command::Run(args)) => cmd_run::run(&cli, args),
        Some(Command::List) => Ok(cmd_list::run(&cli)? as i32),
        Some(Command::Init(args)) => Ok(testmap::cmd_init::run(args)? as i32),
    }
}
