use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command: write the default configuration file.
pub fn handle(cli: &Cli, config_path: &std::path::Path) -> AppResult<()> {
    if let Commands::Init { force } = &cli.command {
        let (path, created) = Config::init(config_path, *force)?;

        if created {
            success(format!("Config file: {}", path.display()));
        } else {
            info(format!(
                "Config file already present: {} (use --force to reset it)",
                path.display()
            ));
        }
    }
    Ok(())
}
