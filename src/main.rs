//! ClientPortal Server — private file-sharing portal
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use portal_core::config::AppConfig;
use portal_core::error::AppError;
use portal_database::repositories::portal::PortalStore;

#[tokio::main]
async fn main() {
    let env = std::env::var("PORTAL_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting ClientPortal v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    let db_pool = portal_database::connection::DatabasePool::connect(&config.database)
        .await?
        .into_pool();

    portal_database::migration::run_migrations(&db_pool).await?;

    // ── Step 2: Object store + URL resolver ──────────────────────
    tracing::info!(url = %config.storage.url, "Initializing object store client");
    let object_store = Arc::new(portal_storage::supabase::SupabaseStore::new(&config.storage));
    let resolver = Arc::new(portal_storage::resolver::StorageResolver::new(
        object_store,
        config.storage.signed_url_ttl_seconds,
    ));

    // ── Step 3: Repository and hasher ────────────────────────────
    let portal_repo: Arc<dyn PortalStore> = Arc::new(
        portal_database::repositories::portal::PortalRepository::new(db_pool.clone()),
    );
    let password_hasher = Arc::new(portal_auth::password::hasher::PasswordHasher::new());

    // ── Step 4: Services ─────────────────────────────────────────
    let portal_service = Arc::new(portal_service::portal::service::PortalService::new(
        Arc::clone(&portal_repo),
        Arc::clone(&password_hasher),
        config.portal.slug_max_attempts,
    ));
    let redemption_service = Arc::new(portal_service::portal::redeem::RedemptionService::new(
        Arc::clone(&portal_repo),
        Arc::clone(&password_hasher),
        Arc::clone(&resolver),
    ));

    // ── Step 5: Build and start HTTP server ──────────────────────
    let state = portal_api::state::AppState {
        config: Arc::new(config.clone()),
        portal_service,
        redemption_service,
    };

    let app = portal_api::router::build_router(state);
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("ClientPortal server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
}
