use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_SERVICE: &str = "twitter";

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Directory the post is written to (defaults to `<exe dir>/../_posts`)
    pub posts_dir: Option<PathBuf>,
    /// Publication cache JSON file
    pub store: Option<PathBuf>,
    #[serde(default = "default_service")]
    pub service: String,
}

fn default_service() -> String {
    DEFAULT_SERVICE.to_string()
}

impl Config {
    /// Returns the config directory path (~/.config/linkpost or $XDG_CONFIG_HOME/linkpost)
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        let config_base = match std::env::var("XDG_CONFIG_HOME") {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => dirs::home_dir()
                .ok_or_else(|| anyhow::anyhow!("No home directory found"))?
                .join(".config"),
        };
        Ok(config_base.join("linkpost"))
    }

    /// Returns the config file path (~/.config/linkpost/config.toml)
    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Default publication cache (~/.config/linkpost/publications.json)
    pub fn default_store_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join("publications.json"))
    }

    /// Loads ~/.config/linkpost/config.toml, or defaults when it doesn't exist
    pub fn load_default() -> anyhow::Result<Self> {
        let config_path = Self::config_path()?;
        if !config_path.exists() {
            return Ok(Self {
                service: default_service(),
                ..Self::default()
            });
        }
        Self::read(&config_path)
    }

    pub fn read(config_path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(config_path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
