use std::path::Path;

use thiserror::Error;

use crate::models::AppRecord;

/// Sample of the Google Play store shipped with the binary.
const BUNDLED_CATALOG: &str = include_str!("../data/playstore.json");

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Record {index} ({app}) has no genres")]
    EmptyGenres { index: usize, app: String },
}

/// The app dataset, loaded once at startup and read-only afterwards.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<AppRecord>,
}

impl Catalog {
    /// Parse a JSON array of app records.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<AppRecord> = serde_json::from_str(json)?;

        if let Some((index, record)) = records
            .iter()
            .enumerate()
            .find(|(_, r)| r.genres.is_empty())
        {
            return Err(CatalogError::EmptyGenres {
                index,
                app: record.app.clone(),
            });
        }

        Ok(Self { records })
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_CATALOG)
    }

    /// Load from `path` when given, otherwise the bundled sample.
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(path) => {
                tracing::info!("Loading catalog from {}", path.display());
                Self::from_path(path)
            }
            None => {
                tracing::info!("Loading bundled catalog");
                Self::bundled()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_records(self) -> Vec<AppRecord> {
        self.records
    }
}
