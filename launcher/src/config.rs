//! Launcher configuration, optionally read from `launcher.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;

/// Config file looked up in the current directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "launcher.toml";

/// Launcher configuration (TOML).
///
/// Every field has a default, and the defaults reproduce the stock launch:
/// `python ebay_bot.py` in the current directory, pause on failure, exit 0.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LauncherConfig {
    /// Interpreter executable, resolved through `PATH` when not a path.
    pub interpreter: String,

    /// Script passed as the interpreter's first argument.
    pub script: String,

    /// Extra arguments appended after the script.
    pub args: Vec<String>,

    /// Directory to run the child in. Inherits the launcher's when unset.
    pub working_dir: Option<PathBuf>,

    /// Console window title set before the banner.
    pub title: String,

    /// Wait for one line of input after printing the failure diagnostic.
    pub pause_on_failure: bool,

    /// Exit with the child's status instead of always exiting 0.
    pub propagate_exit_code: bool,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            interpreter: "python".to_string(),
            script: "ebay_bot.py".to_string(),
            args: Vec::new(),
            working_dir: None,
            title: "eBay Finder Bot - Launcher".to_string(),
            pause_on_failure: true,
            propagate_exit_code: false,
        }
    }
}

impl LauncherConfig {
    pub fn validate(&self) -> Result<()> {
        if self.interpreter.trim().is_empty() {
            return Err(anyhow!("interpreter must be non-empty"));
        }
        if self.script.trim().is_empty() {
            return Err(anyhow!("script must be non-empty"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `LauncherConfig::default()`. The result is
/// not validated: command line overrides are applied first, then the merged
/// config is checked with [`LauncherConfig::validate`].
pub fn load_config(path: &Path) -> Result<LauncherConfig> {
    if !path.exists() {
        return Ok(LauncherConfig::default());
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: LauncherConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, LauncherConfig::default());
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("launcher.toml");
        fs::write(&path, "interpreter = \"python3\"\nargs = [\"--headless\"]\n").expect("write");

        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.interpreter, "python3");
        assert_eq!(cfg.args, vec!["--headless".to_string()]);
        assert_eq!(cfg.script, "ebay_bot.py");
        assert!(cfg.pause_on_failure);
        assert!(!cfg.propagate_exit_code);
    }

    #[test]
    fn blank_script_is_rejected() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("launcher.toml");
        fs::write(&path, "script = \"  \"\n").expect("write");

        let cfg = load_config(&path).expect("load");
        let err = cfg.validate().expect_err("blank script");
        assert!(err.to_string().contains("script must be non-empty"));
    }

    #[test]
    fn malformed_file_reports_path() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("launcher.toml");
        fs::write(&path, "pause_on_failure = \"sometimes\"\n").expect("write");

        let err = load_config(&path).expect_err("bad type");
        assert!(format!("{err:#}").contains("parse"));
    }
}
