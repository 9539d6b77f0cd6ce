use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base url the `login.json` / `showtable.json` endpoints live under
    pub server_url: String,
    /// Initial value of the page-size field
    pub page_size: usize,
    /// Initial value of the command field
    pub command: String,
    /// Sent as `viscols`; 1 asks the server for column headers
    pub viscols: u8,
    pub last_username: String,
    pub last_table: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: "http://localhost:8080/".to_string(),
            page_size: 10,
            command: "SELECT".to_string(),
            viscols: 1,
            last_username: String::new(),
            last_table: String::new(),
        }
    }
}

impl Config {
    /// `$HOME/.showtable-tui`
    pub fn default_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".showtable-tui"))
    }

    fn config_path(dir: &Path) -> PathBuf {
        dir.join("config.json")
    }

    /// Load the config from `dir`, falling back to defaults when the file is
    /// missing or unreadable.
    pub fn load_from(dir: &Path) -> Config {
        let path = Self::config_path(dir);
        let Ok(contents) = fs::read_to_string(&path) else {
            return Config::default();
        };
        match serde_json::from_str(&contents) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable config");
                Config::default()
            }
        }
    }

    /// Save the config to `dir`
    pub fn save_to(&self, dir: &Path) -> anyhow::Result<()> {
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(Self::config_path(dir), contents)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!(
            "showtable-tui-config-{}-{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = scratch_dir("missing");
        assert_eq!(Config::load_from(&dir), Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = scratch_dir("roundtrip");
        let config = Config {
            server_url: "http://db.local:9000/".to_string(),
            page_size: 25,
            last_table: "users".to_string(),
            ..Config::default()
        };
        config.save_to(&dir).unwrap();

        assert_eq!(Config::load_from(&dir), config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = scratch_dir("partial");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.json"), r#"{"page_size": 5}"#).unwrap();

        let config = Config::load_from(&dir);
        assert_eq!(config.page_size, 5);
        assert_eq!(config.command, "SELECT");
        assert_eq!(config.viscols, 1);
    }

    #[test]
    fn test_corrupt_file_gives_defaults() {
        let dir = scratch_dir("corrupt");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.json"), "{not json").unwrap();

        assert_eq!(Config::load_from(&dir), Config::default());
    }
}
