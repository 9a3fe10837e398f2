use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use playstore::{create_router, AppState, Catalog, Config};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            eprintln!("Optional: LISTEN_ADDR (default: 0.0.0.0:8000)");
            eprintln!("Optional: CATALOG_PATH (default: bundled catalog)");
            std::process::exit(1);
        }
    };

    tracing::info!("Starting Play Store server");
    tracing::info!("Listen address: {}", config.listen_addr);

    // Load the app catalog
    let catalog = match Catalog::load(config.catalog_path.as_deref()) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("Catalog error: {}", e);
            std::process::exit(1);
        }
    };
    if catalog.is_empty() {
        tracing::warn!("Catalog is empty, /apps will always return []");
    } else {
        tracing::info!("Loaded {} apps", catalog.len());
    }

    let app = create_router(AppState::new(catalog));

    // Start server
    let listener = match tokio::net::TcpListener::bind(&config.listen_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            eprintln!("Failed to bind to {}: {}", config.listen_addr, e);
            std::process::exit(1);
        }
    };

    tracing::info!("Server running at http://{}", config.listen_addr);

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
