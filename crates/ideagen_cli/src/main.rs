//! CLI entry point for ideagen.

mod cli;
mod commands;
mod output;

use std::path::{Path, PathBuf};

use clap::Parser;
use ideagen_observability::ObservabilityConfig;

use crate::cli::Cli;

/// Directories searched upward for a project `.env`.
const MAX_ENV_SEARCH_DEPTH: usize = 32;

/// Load configuration from env files. Variables already set in the process win.
/// Order: 1) ~/.ideagen/env  2) nearest .env from the working directory upward
fn load_ideagen_config() {
    if let Some(path) = global_env_path() {
        if path.exists() {
            let _ = dotenvy::from_path(&path);
        }
    }
    if let Ok(cwd) = std::env::current_dir() {
        if let Some(env_file) = find_upward(&cwd, ".env") {
            let _ = dotenvy::from_path(&env_file);
        }
    }
}

pub(crate) fn global_env_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".ideagen").join("env"))
}

fn find_upward(start: &Path, name: &str) -> Option<PathBuf> {
    let mut dir = start.to_path_buf();
    for _ in 0..MAX_ENV_SEARCH_DEPTH {
        let candidate = dir.join(name);
        if candidate.exists() {
            return Some(candidate);
        }
        dir = dir.parent()?.to_path_buf();
    }
    None
}

fn init_logging(verbose: bool) {
    let mut config = ObservabilityConfig::from_env().with_version(env!("CARGO_PKG_VERSION"));
    if verbose {
        config = config.with_log_level("debug");
    }
    if let Err(e) = ideagen_observability::init(config) {
        output::warning(&format!("Logging init failed (continuing): {e}"));
    }
}

#[tokio::main]
async fn main() {
    load_ideagen_config();
    let cli = Cli::parse();
    output::init(cli.output);
    init_logging(cli.verbose);

    let result = commands::handle(cli).await;
    ideagen_observability::shutdown();

    if let Err(e) = result {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
