//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use portal_core::config::AppConfig;
use portal_service::portal::redeem::RedemptionService;
use portal_service::portal::service::PortalService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Portal creation service.
    pub portal_service: Arc<PortalService>,
    /// Download redemption service.
    pub redemption_service: Arc<RedemptionService>,
}
