pub mod json;
pub mod memory;

pub use json::JsonFileStore;
pub use memory::MemoryStore;

use serde::Deserialize;

/// One post as recorded by the publication cache
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Publication {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub original_link: Option<String>,
    /// ISO-8601-ish, e.g. `2024-03-10T08:15:00`; only the date part is used
    #[serde(default)]
    pub publication_date: Option<String>,
    #[serde(default)]
    pub service: Option<String>,
}

impl Publication {
    pub fn new(title: &str, original_link: &str, publication_date: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            original_link: Some(original_link.to_string()),
            publication_date: Some(publication_date.to_string()),
            service: None,
        }
    }
}

/// Source of publications, queried one service at a time
pub trait PublicationStore {
    /// All publications for `service`, in the order the store keeps them
    fn get_publications_by_service(&self, service: &str) -> anyhow::Result<Vec<Publication>>;
}
