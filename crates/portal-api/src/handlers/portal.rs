//! Portal creation handlers (admin side).

use axum::Json;
use axum::extract::State;
use validator::Validate;

use portal_core::error::AppError;
use portal_service::portal::service::CreatePortalRequest as CreatePortalInput;

use crate::dto::request::CreatePortalRequest;
use crate::dto::response::CreatePortalResponse;
use crate::error::ApiError;
use crate::handlers::validation_message;
use crate::state::AppState;

/// POST /api/admin/portals
pub async fn create_portal(
    State(state): State<AppState>,
    Json(req): Json<CreatePortalRequest>,
) -> Result<Json<CreatePortalResponse>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(validation_message(&e)))?;

    let portal = state
        .portal_service
        .create_portal(CreatePortalInput {
            client_name: req.client_name,
            client_email: req.client_email,
            password: req.password,
            file_url: req.file_url,
            expires_at: req.expires_at,
        })
        .await?;

    Ok(Json(CreatePortalResponse { slug: portal.slug }))
}
