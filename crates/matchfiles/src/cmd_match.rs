// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The matching command: resolve settings, walk, print.

use std::io::Write;
use std::path::{Path, PathBuf};

use matchfiles::cli::{Cli, OutputFormat};
use matchfiles::config::{self, Config};
use matchfiles::discovery;
use matchfiles::error::{Error, ExitCode};
use matchfiles::filesystem::{FileSystem, OsFileSystem};
use matchfiles::options::MatchOptions;
use matchfiles::walker::{Walk, WalkStats};

pub fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let cwd = resolve_cwd(cli.cwd.as_deref())?;
    let search_root = match &cli.path {
        Some(path) => cwd.join(path),
        None => cwd.clone(),
    };
    let explicit_config = cli.config.as_ref().map(|path| cwd.join(path));

    let config_path = discovery::resolve_config(explicit_config.as_deref(), &search_root)?;
    let config = match &config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            config::load_with_warnings(path)?
        }
        None => {
            tracing::debug!("no config found, using defaults");
            Config::default()
        }
    };

    let fs = OsFileSystem::default();
    let options = MatchOptions::resolve(
        cli,
        &config,
        config_path.as_deref(),
        &cwd.to_string_lossy(),
        fs.use_case_sensitive_file_names(),
    );

    let absolute_root = options.absolute_root();
    if !fs.directory_exists(&absolute_root) {
        return Err(Error::Argument(format!("not a directory: {}", absolute_root)).into());
    }

    tracing::debug!(
        "matching under {} ({} includes, {} excludes, case-sensitive: {})",
        absolute_root,
        options.includes.len(),
        options.excludes.len(),
        options.case_sensitive
    );
    let walk = options.request().run(&fs);

    write_files(&walk, cli.output)?;
    if cli.stats {
        print_stats(&walk.stats);
    }

    Ok(if walk.files.is_empty() {
        ExitCode::NoMatches
    } else {
        ExitCode::Success
    })
}

fn resolve_cwd(explicit: Option<&Path>) -> anyhow::Result<PathBuf> {
    let process_cwd = std::env::current_dir().map_err(|e| Error::Io {
        path: PathBuf::from("."),
        source: e,
    })?;
    let Some(explicit) = explicit else {
        return Ok(process_cwd);
    };
    let cwd = process_cwd.join(explicit);
    if !cwd.is_dir() {
        return Err(Error::Argument(format!("--cwd is not a directory: {}", cwd.display())).into());
    }
    Ok(cwd)
}

fn write_files(walk: &Walk, format: OutputFormat) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Text => {
            for file in &walk.files {
                writeln!(out, "{}", file)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &walk.files)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn print_stats(stats: &WalkStats) {
    eprintln!("directories visited: {}", stats.directories_visited);
    eprintln!("directories revisited: {}", stats.directories_revisited);
    eprintln!("directories pruned: {}", stats.directories_pruned);
    eprintln!("depth limited: {}", stats.depth_limited);
    eprintln!("files filtered: {}", stats.files_filtered);
    eprintln!("files matched: {}", stats.files_matched);
}
