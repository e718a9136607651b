use super::{Publication, PublicationStore};
use std::collections::HashMap;

/// In-memory store keyed by service name
#[derive(Debug, Default)]
pub struct MemoryStore {
    by_service: HashMap<String, Vec<Publication>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, service: &str, publication: Publication) -> Self {
        self.push(service, publication);
        self
    }

    pub fn push(&mut self, service: &str, mut publication: Publication) {
        publication.service = Some(service.to_string());
        self.by_service
            .entry(service.to_string())
            .or_default()
            .push(publication);
    }
}

impl PublicationStore for MemoryStore {
    fn get_publications_by_service(&self, service: &str) -> anyhow::Result<Vec<Publication>> {
        Ok(self.by_service.get(service).cloned().unwrap_or_default())
    }
}
