use std::sync::Arc;

use crate::catalog::Catalog;
use crate::models::AppRecord;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub apps: Arc<Vec<AppRecord>>,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            apps: Arc::new(catalog.into_records()),
        }
    }
}
