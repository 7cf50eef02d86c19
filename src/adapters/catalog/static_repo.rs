//! Implements CatalogPort over a fixed set of lawyers.
//!
//! The default catalog is embedded at compile time; a JSON file with the
//! same shape can be loaded instead (LEXBOOK_CATALOG). Either way the data
//! is immutable for the process lifetime.

use crate::adapters::catalog::CatalogData;
use crate::domain::{DomainError, Lawyer};
use crate::ports::CatalogPort;
use std::path::Path;
use tokio::fs;

/// Built-in catalog, embedded at compile time.
const CATALOG_JSON: &str = include_str!("catalog.json");

/// Fixed, read-only catalog.
#[derive(Debug)]
pub struct StaticCatalog {
    data: CatalogData,
}

impl StaticCatalog {
    pub fn new(data: CatalogData) -> Self {
        Self { data }
    }

    /// The compiled-in catalog.
    pub fn embedded() -> Result<Self, DomainError> {
        let data = serde_json::from_str(CATALOG_JSON)
            .map_err(|e| DomainError::Catalog(format!("embedded catalog: {e}")))?;
        Ok(Self::new(data))
    }

    /// Load a catalog from a JSON file with the same shape as the embedded one.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .await
            .map_err(|e| DomainError::Catalog(format!("read {}: {e}", path.display())))?;
        let data = serde_json::from_str(&raw)
            .map_err(|e| DomainError::Catalog(format!("parse {}: {e}", path.display())))?;
        Ok(Self::new(data))
    }
}

#[async_trait::async_trait]
impl CatalogPort for StaticCatalog {
    async fn lawyers(&self) -> Result<Vec<Lawyer>, DomainError> {
        Ok(self.data.lawyers.clone())
    }

    async fn specialties(&self) -> Result<Vec<String>, DomainError> {
        Ok(self.data.specialty_tags())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn embedded_catalog_parses() {
        let catalog = StaticCatalog::embedded().unwrap();
        let lawyers = catalog.lawyers().await.unwrap();
        assert_eq!(lawyers.len(), 2);
        assert_eq!(lawyers[0].id, 1);
        assert_eq!(lawyers[0].name, "Ganesh");
        assert_eq!(lawyers[0].cost_per_appointment, 200);
        assert_eq!(lawyers[1].name, "Narasimha Reddy");

        let specialties = catalog.specialties().await.unwrap();
        assert_eq!(
            specialties,
            ["Criminal Law", "Property Law", "Divorce Law", "Family Law"]
        );
    }

    #[tokio::test]
    async fn file_catalog_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, CATALOG_JSON).unwrap();

        let catalog = StaticCatalog::load(&path).await.unwrap();
        assert_eq!(catalog.lawyers().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn missing_file_is_a_catalog_error() {
        let err = StaticCatalog::load("/nonexistent/catalog.json")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Catalog(_)));
    }
}
