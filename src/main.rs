// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use docsift::build::{run_build, BuildConfig, BuildOptions};
use docsift::{SearchIndex, SearchOptions, Searcher};

mod cli;
use cli::{display, Cli, Commands};

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so `search --json` output stays clean on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Err(e) = run(cli.command) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Index {
            content,
            output,
            config,
            cache,
        } => {
            let config = match config {
                Some(path) => BuildConfig::load(&path)?,
                None => BuildConfig::default(),
            };
            let options = BuildOptions::new(config, content, output)?.with_cache(cache);
            let report = run_build(&options).context("build failed")?;
            display::print_build_report(&report);
        }
        Commands::Search {
            file,
            query,
            limit,
            context,
            json,
        } => {
            let index = load_index(&file)?;
            let defaults = SearchOptions::for_index(&index);
            let options = SearchOptions {
                limit,
                context_length: context.unwrap_or(defaults.context_length),
            };
            let start = Instant::now();
            let results = Searcher::new(&index).search(&query, &options);
            let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                display::print_results(&query, &results, elapsed_ms);
            }
        }
        Commands::Inspect { file } => {
            let bytes = fs::read(&file).with_context(|| format!("failed to read {}", file.display()))?;
            let index = SearchIndex::from_json(&bytes)
                .with_context(|| format!("failed to load {}", file.display()))?;
            display::print_stats(&file, &index.stats(), bytes.len());
        }
    }
    Ok(())
}

fn load_index(path: &Path) -> Result<SearchIndex> {
    SearchIndex::read(path).with_context(|| format!("failed to load {}", path.display()))
}
