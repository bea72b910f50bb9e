// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use crate::utils::path::expand_tilde;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Resolve the output directory, creating it when missing.
///
/// - `~/` is expanded
/// - an existing path that is not a directory is rejected
pub(crate) fn prepare_output_dir(dir: &str) -> AppResult<PathBuf> {
    if dir.trim().is_empty() {
        return Err(AppError::InvalidOutputDir("empty path".into()));
    }

    let path = expand_tilde(dir);
    if path.exists() && !path.is_dir() {
        return Err(AppError::InvalidOutputDir(format!(
            "{} is not a directory",
            path.display()
        )));
    }

    fs::create_dir_all(&path)?;
    Ok(path)
}

/// Verifica se un file può essere creato o sovrascritto.
///
/// - Se il file NON esiste → Ok
/// - Se esiste ed è abilitato `force` → Ok
/// - Se esiste e `force == false` → chiede conferma all'utente.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));

    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;

    if confirms(&answer) {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::ExportCancelled(path.display().to_string()))
    }
}

fn confirms(answer: &str) -> bool {
    let ans = answer.trim().to_ascii_lowercase();
    ans == "y" || ans == "yes"
}
