use axum::{extract::State, Extension, Json};
use serde::Deserialize;
use tonal_intake::{IntakeError, ProcessOutcome};

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct AnalyzeRequest {
    pub text: String,
}

pub(super) async fn analyze_text(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<AnalyzeRequest>,
) -> Result<Json<ApiResponse<ProcessOutcome>>, ApiError> {
    let outcome = state
        .intake
        .process(&body.text, &state.history)
        .await
        .map_err(|e| match e {
            IntakeError::EmptyText => {
                ApiError::new(req_id.0.clone(), "validation_error", "text must not be empty")
            }
            other => {
                tracing::error!(error = %other, "analysis failed");
                ApiError::new(req_id.0.clone(), "internal_error", "analysis failed")
            }
        })?;

    Ok(Json(ApiResponse {
        data: outcome,
        meta: ResponseMeta::new(req_id.0),
    }))
}
