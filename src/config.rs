//! User configuration management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::task::{Priority, DEFAULT_TASKS_FILE};

/// Overrides the config directory (mainly for tests and portable setups)
pub const CONFIG_DIR_ENV: &str = "TODO_BOARD_CONFIG_DIR";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Task file used when `--file` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tasks_file: Option<PathBuf>,

    #[serde(default)]
    pub board: BoardConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Priority preselected in the add form
    #[serde(default = "default_priority")]
    pub default_priority: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            default_priority: default_priority(),
        }
    }
}

impl BoardConfig {
    pub fn default_priority(&self) -> Priority {
        Priority::normalize(&self.default_priority)
    }
}

fn default_priority() -> String {
    Priority::Medium.label().to_string()
}

pub fn get_app_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    let base = dirs::config_dir().context("Could not determine config directory")?;
    Ok(base.join("todo-board"))
}

fn config_path() -> Result<PathBuf> {
    Ok(get_app_dir()?.join("config.toml"))
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = config_path()?;
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config)
    }

    /// Pick the task file: explicit override, then config, then `tasks.csv`
    pub fn resolve_tasks_path(&self, cli_override: Option<&Path>) -> PathBuf {
        cli_override
            .map(Path::to_path_buf)
            .or_else(|| self.tasks_file.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TASKS_FILE))
    }
}

pub fn save_config(config: &Config) -> Result<()> {
    let path = config_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(&path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.tasks_file.is_none());
        assert_eq!(config.board.default_priority(), Priority::Medium);
    }

    #[test]
    fn test_parse_partial_toml() -> Result<()> {
        let config: Config = toml::from_str("tasks_file = \"/tmp/mine.csv\"\n")?;
        assert_eq!(config.tasks_file, Some(PathBuf::from("/tmp/mine.csv")));
        assert_eq!(config.board.default_priority(), Priority::Medium);

        let config: Config = toml::from_str("[board]\ndefault_priority = \"nope\"\n")?;
        assert_eq!(config.board.default_priority(), Priority::Low);
        Ok(())
    }

    #[test]
    fn test_resolve_tasks_path_precedence() {
        let mut config = Config::default();
        assert_eq!(
            config.resolve_tasks_path(None),
            PathBuf::from(DEFAULT_TASKS_FILE)
        );

        config.tasks_file = Some(PathBuf::from("/data/tasks.csv"));
        assert_eq!(
            config.resolve_tasks_path(None),
            PathBuf::from("/data/tasks.csv")
        );
        assert_eq!(
            config.resolve_tasks_path(Some(Path::new("other.csv"))),
            PathBuf::from("other.csv")
        );
    }

    #[test]
    #[serial]
    fn test_save_and_load_roundtrip() -> Result<()> {
        let temp = tempdir()?;
        std::env::set_var(CONFIG_DIR_ENV, temp.path().join("cfg"));

        assert!(Config::load()?.tasks_file.is_none());

        let mut config = Config::default();
        config.tasks_file = Some(PathBuf::from("/somewhere/tasks.csv"));
        config.board.default_priority = "High".to_string();
        save_config(&config)?;

        let loaded = Config::load()?;
        assert_eq!(loaded.tasks_file, config.tasks_file);
        assert_eq!(loaded.board.default_priority(), Priority::High);

        std::env::remove_var(CONFIG_DIR_ENV);
        Ok(())
    }

    #[test]
    #[serial]
    fn test_load_invalid_toml_fails() -> Result<()> {
        let temp = tempdir()?;
        std::env::set_var(CONFIG_DIR_ENV, temp.path());
        fs::write(temp.path().join("config.toml"), "tasks_file = [")?;

        assert!(Config::load().is_err());

        std::env::remove_var(CONFIG_DIR_ENV);
        Ok(())
    }
}
