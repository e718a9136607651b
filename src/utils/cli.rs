use crate::core::config::Config;
use clap::Parser;
use std::path::PathBuf;

/// Build a Jekyll post with the links published on one day
#[derive(Parser, Debug)]
#[command(
    name = "linkpost",
    about = "Daily links post generator",
    after_help = "USAGE:\n  linkpost YYYY-MM-DD\n\nConfig: ~/.config/linkpost/config.toml (posts_dir, store, service)"
)]
pub struct Args {
    /// Target date (YYYY-MM-DD)
    #[arg(value_name = "DATE")]
    pub date: String,

    /// Directory where the post is written
    #[arg(long = "posts-dir", value_name = "DIR")]
    pub posts_dir: Option<PathBuf>,

    /// Publication cache file (JSON)
    #[arg(long = "store", value_name = "FILE")]
    pub store: Option<PathBuf>,

    /// Service whose publications are listed
    #[arg(long = "service", value_name = "NAME")]
    pub service: Option<String>,

    /// Debug logging
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// Settings for one run after merging flags over config
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    pub date: String,
    pub posts_dir: PathBuf,
    pub store: PathBuf,
    pub service: String,
}

impl Args {
    /// Flags win over config, config wins over built-in defaults
    pub fn resolve(self, config: Config) -> anyhow::Result<RunSettings> {
        let posts_dir = match self.posts_dir.or(config.posts_dir) {
            Some(dir) => dir,
            None => crate::utils::file::default_posts_dir()?,
        };
        let store = match self.store.or(config.store) {
            Some(path) => path,
            None => Config::default_store_path()?,
        };
        let service = self.service.unwrap_or(config.service);
        if service.trim().is_empty() {
            anyhow::bail!("Service name cannot be empty");
        }

        Ok(RunSettings {
            date: self.date,
            posts_dir,
            store,
            service,
        })
    }
}
