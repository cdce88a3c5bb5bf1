//! Download redemption handlers (client side).

use axum::Json;
use axum::extract::{Path, State};
use validator::Validate;

use portal_core::error::AppError;

use crate::dto::request::RedeemRequest;
use crate::dto::response::DownloadResponse;
use crate::error::ApiError;
use crate::handlers::validation_message;
use crate::state::AppState;

/// POST /api/download/{slug}
pub async fn redeem(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(req): Json<RedeemRequest>,
) -> Result<Json<DownloadResponse>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(validation_message(&e)))?;

    let grant = state.redemption_service.redeem(&slug, &req.password).await?;

    Ok(Json(DownloadResponse {
        client_name: grant.client_name,
        file_name: grant.file_name,
        file_size: grant.file_size,
        file_url: grant.file_url,
    }))
}
