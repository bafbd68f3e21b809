// Thin proxy over the text enhancer. Upstream failures surface as errors here;
// only the editor's summary action falls back to the original text.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct EnhanceRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub context: String,
}

#[derive(Serialize)]
pub struct EnhanceResponse {
    pub text: String,
}

fn require_text(req: &EnhanceRequest) -> Result<(), AppError> {
    if req.text.trim().is_empty() {
        return Err(AppError::Validation("Missing \"text\" field".to_string()));
    }
    Ok(())
}

/// POST /api/optimize
pub async fn handle_optimize(
    State(state): State<AppState>,
    Json(req): Json<EnhanceRequest>,
) -> Result<Json<EnhanceResponse>, AppError> {
    require_text(&req)?;
    info!("Optimizing {} chars of text", req.text.len());
    let text = state.enhancer.optimize(&req.text, &req.context).await?;
    Ok(Json(EnhanceResponse { text }))
}

/// POST /api/translate
pub async fn handle_translate(
    State(state): State<AppState>,
    Json(req): Json<EnhanceRequest>,
) -> Result<Json<EnhanceResponse>, AppError> {
    require_text(&req)?;
    info!("Translating {} chars of text", req.text.len());
    let text = state.enhancer.translate(&req.text).await?;
    Ok(Json(EnhanceResponse { text }))
}
