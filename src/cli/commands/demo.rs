use crate::cli::commands::load_snapshot;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::demo::run_walkthrough;
use crate::errors::AppResult;
use crate::share::dashboard_url;

/// Handle the `demo` command
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let snapshot = load_snapshot(cli)?;
    let url = dashboard_url(&cfg.origin, &cfg.dashboard_slug);
    run_walkthrough(&snapshot, &url)?;
    Ok(())
}
