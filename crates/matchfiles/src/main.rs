// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! matchfiles CLI entry point.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use matchfiles::cli::Cli;
use matchfiles::error::ExitCode;

mod cmd_match;

fn init_logging() {
    let filter =
        EnvFilter::try_from_env("MATCHFILES_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

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
            eprintln!("matchfiles: {}", e);
            match e.downcast_ref::<matchfiles::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    cmd_match::run(&cli)
}
