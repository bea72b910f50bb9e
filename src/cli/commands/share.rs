use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::share::{SystemClipboardHost, TerminalNotifier, copy_dashboard_link};

/// Handle the `share` command. Clipboard problems are never an error here:
/// the worst case prints the link for manual copy.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Share { origin, no_secure } = cmd {
        let origin = origin.as_deref().unwrap_or(cfg.origin.as_str());
        if !(origin.starts_with("http://") || origin.starts_with("https://")) {
            return Err(AppError::Config(format!(
                "origin must start with http:// or https://, got '{origin}'"
            )));
        }

        let mut host = SystemClipboardHost::detect(cfg.secure_clipboard && !*no_secure);
        copy_dashboard_link(origin, &cfg.dashboard_slug, &mut host, &mut TerminalNotifier);
    }
    Ok(())
}
