pub mod catalog;
pub mod config;
pub mod models;
pub mod query;
pub mod routes;
pub mod state;

pub use catalog::{Catalog, CatalogError};
pub use config::Config;
pub use models::{AppRecord, AppsQuery, Genre, SortKey};
pub use query::{QueryProcessor, ValidationError};
pub use routes::create_router;
pub use state::AppState;
