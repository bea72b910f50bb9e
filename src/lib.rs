//! sofreport library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod demo;
pub mod errors;
pub mod export;
pub mod models;
pub mod share;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::{Path, PathBuf};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli, config_path),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, config_path),
        Commands::Demo => cli::commands::demo::handle(cli, cfg),
        Commands::Events => cli::commands::events::handle(cli),
        Commands::Export { .. } => cli::commands::export::handle(cli, cfg),
        Commands::Share { .. } => cli::commands::share::handle(&cli.command, cfg),
    }
}

/// `--config-file`, or ~/.sofreport/sofreport.conf
fn config_path(cli: &Cli) -> PathBuf {
    match &cli.config_file {
        Some(file) => utils::expand_tilde(file),
        None => Config::config_file(),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    let path = config_path(&cli);

    // init must work even when the existing file is broken
    let cfg = match cli.command {
        Commands::Init { .. } => Config::default(),
        _ => Config::load_from(&path)?,
    };

    dispatch(&cli, &cfg, &path)
}
