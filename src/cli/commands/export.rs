use crate::cli::commands::load_snapshot;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Export { format, all, force } = &cli.command {
        let snapshot = load_snapshot(cli)?;
        let out_dir = cli.out_dir.as_deref().unwrap_or(cfg.output_dir.as_str());

        if *all {
            ExportLogic::export_reports(&snapshot, out_dir, *force)?;
        } else {
            ExportLogic::export(&snapshot, format, out_dir, *force)?;
        }
    }
    Ok(())
}
