//! Catalog adapters. Implement CatalogPort over embedded or file-backed data.

pub mod static_repo;

pub use static_repo::StaticCatalog;

use crate::domain::Lawyer;
use serde::{Deserialize, Serialize};

/// Serialized catalog shape (embedded asset and LEXBOOK_CATALOG files).
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CatalogData {
    /// Explicit specialty list; derived from the lawyers when empty.
    #[serde(default)]
    pub specialties: Vec<String>,
    pub lawyers: Vec<Lawyer>,
}

impl CatalogData {
    /// Specialty tags: the explicit list, or first-seen distinct tags
    /// across the lawyers when none was given.
    pub fn specialty_tags(&self) -> Vec<String> {
        if !self.specialties.is_empty() {
            return self.specialties.clone();
        }
        let mut tags: Vec<String> = Vec::new();
        for lawyer in &self.lawyers {
            for tag in &lawyer.specialties {
                if !tags.contains(tag) {
                    tags.push(tag.clone());
                }
            }
        }
        tags
    }
}
