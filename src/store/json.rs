use super::{Publication, PublicationStore};
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};

/// Publication cache persisted as a JSON array of records
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> anyhow::Result<Vec<Publication>> {
        // Nothing cached yet
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "publication cache not found");
            return Ok(vec![]);
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        let pubs = serde_json::from_str::<Vec<Publication>>(&content)
            .with_context(|| format!("parsing {}", self.path.display()))?;
        Ok(pubs)
    }
}

impl PublicationStore for JsonFileStore {
    fn get_publications_by_service(&self, service: &str) -> anyhow::Result<Vec<Publication>> {
        let pubs = self
            .load()?
            .into_iter()
            .filter(|p| p.service.as_deref() == Some(service))
            .collect::<Vec<_>>();
        tracing::debug!(service, count = pubs.len(), "loaded publications");
        Ok(pubs)
    }
}
