use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LinksError {
    #[error("Invalid date format: '{input}'. Please use 'YYYY-MM-DD'.")]
    InvalidDateFormat { input: String },

    #[error("Could not write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Publication store failed for service '{service}': {source}")]
    Store {
        service: String,
        #[source]
        source: anyhow::Error,
    },
}

pub type Result<T> = std::result::Result<T, LinksError>;
