pub mod config;
pub mod demo;
pub mod events;
pub mod export;
pub mod init;
pub mod share;

use crate::cli::parser::Cli;
use crate::errors::AppResult;
use crate::models::Snapshot;
use crate::ui::messages::info;
use crate::utils::expand_tilde;

/// Snapshot from `--data`, or the built-in MV PACIFIC GLORY voyage.
pub(crate) fn load_snapshot(cli: &Cli) -> AppResult<Snapshot> {
    match &cli.data {
        Some(file) => {
            let path = expand_tilde(file);
            info(format!("Loading snapshot: {}", path.display()));
            Snapshot::from_json_file(&path)
        }
        None => Ok(Snapshot::pacific_glory()),
    }
}
