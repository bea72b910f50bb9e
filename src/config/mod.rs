use crate::errors::{AppError, AppResult};
use crate::share::DEFAULT_DASHBOARD_SLUG;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Where the fixed-name report files are written
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    /// Origin of the web dashboard, e.g. https://sof.example.com
    #[serde(default = "default_origin")]
    pub origin: String,
    #[serde(default = "default_dashboard_slug")]
    pub dashboard_slug: String,
    /// Allow the platform clipboard program (pbcopy, wl-copy, xclip...)
    #[serde(default = "default_secure_clipboard")]
    pub secure_clipboard: bool,
}

fn default_output_dir() -> String {
    ".".to_string()
}
fn default_origin() -> String {
    "http://localhost:5173".to_string()
}
fn default_dashboard_slug() -> String {
    DEFAULT_DASHBOARD_SLUG.to_string()
}
fn default_secure_clipboard() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            origin: default_origin(),
            dashboard_slug: default_dashboard_slug(),
            secure_clipboard: default_secure_clipboard(),
        }
    }
}

impl Config {
    /// Return the configuration directory (~/.sofreport)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".sofreport")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("sofreport.conf")
    }

    /// Load configuration from `path`, or defaults if not found.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content =
            fs::read_to_string(path).map_err(|_| AppError::ConfigLoad(path.display().to_string()))?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if !(self.origin.starts_with("http://") || self.origin.starts_with("https://")) {
            return Err(AppError::Config(format!(
                "origin must start with http:// or https://, got '{}'",
                self.origin
            )));
        }
        if self.dashboard_slug.trim().is_empty() || self.dashboard_slug.contains('/') {
            return Err(AppError::Config(format!(
                "invalid dashboard_slug '{}'",
                self.dashboard_slug
            )));
        }
        Ok(())
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Write the default configuration unless a file is already there.
    /// Returns the config path and whether it was created.
    pub fn init(path: &Path, force: bool) -> AppResult<(PathBuf, bool)> {
        if path.exists() && !force {
            return Ok((path.to_path_buf(), false));
        }

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, Config::default().to_yaml()?)?;
        Ok((path.to_path_buf(), true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_gives_defaults() {
        let tmp = tempdir().unwrap();
        let cfg = Config::load_from(&tmp.path().join("none.conf")).unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.dashboard_slug, "pacific-glory-jan2024");
    }

    #[test]
    fn partial_file_fills_defaults() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("sofreport.conf");
        fs::write(&path, "origin: https://sof.example.com\nsecure_clipboard: false\n").unwrap();

        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.origin, "https://sof.example.com");
        assert!(!cfg.secure_clipboard);
        assert_eq!(cfg.output_dir, ".");
    }

    #[test]
    fn bad_origin_is_rejected() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("sofreport.conf");
        fs::write(&path, "origin: sof.example.com\n").unwrap();

        assert!(matches!(Config::load_from(&path), Err(AppError::Config(_))));
    }

    #[test]
    fn init_does_not_clobber_without_force() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("nested/sofreport.conf");

        let (_, created) = Config::init(&path, false).unwrap();
        assert!(created);

        fs::write(&path, "origin: https://custom.example\n").unwrap();
        let (_, created) = Config::init(&path, false).unwrap();
        assert!(!created);
        assert_eq!(Config::load_from(&path).unwrap().origin, "https://custom.example");

        let (_, created) = Config::init(&path, true).unwrap();
        assert!(created);
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }
}
