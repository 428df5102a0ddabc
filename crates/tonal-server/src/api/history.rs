use axum::{
    extract::{Path, Query, State},
    http::header,
    response::IntoResponse,
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use tonal_history::{export_csv, HistoryStats};
use tonal_sentiment::SentimentResult;

use crate::middleware::RequestId;

use super::{map_history_error, normalize_limit, ApiError, ApiResponse, AppState, ResponseMeta};

const EXPORT_FILENAME: &str = "sentiment-history.csv";

#[derive(Debug, Deserialize)]
pub(super) struct HistoryQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub(super) struct ClearedData {
    pub removed: usize,
}

#[derive(Debug, Serialize)]
pub(super) struct DeletedData {
    pub id: String,
}

pub(super) async fn list_history(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<HistoryQuery>,
) -> Json<ApiResponse<Vec<SentimentResult>>> {
    let data = state
        .history
        .lock()
        .await
        .recent(normalize_limit(query.limit))
        .into_iter()
        .cloned()
        .collect();

    Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    })
}

/// `data` is `null` while the history is empty.
pub(super) async fn history_stats(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Option<HistoryStats>>> {
    let data = state.history.lock().await.stats();
    Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    })
}

pub(super) async fn clear_history(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<ApiResponse<ClearedData>>, ApiError> {
    let mut history = state.history.lock().await;
    let removed = history.len();
    history
        .clear()
        .map_err(|e| map_history_error(req_id.0.clone(), &e))?;
    drop(history);

    tracing::info!(removed, "history cleared");
    Ok(Json(ApiResponse {
        data: ClearedData { removed },
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(super) async fn delete_history_item(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<DeletedData>>, ApiError> {
    let removed = state
        .history
        .lock()
        .await
        .delete(&id)
        .map_err(|e| map_history_error(req_id.0.clone(), &e))?;

    if !removed {
        return Err(ApiError::new(
            req_id.0,
            "not_found",
            format!("analysis '{id}' not found"),
        ));
    }

    Ok(Json(ApiResponse {
        data: DeletedData { id },
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(super) async fn export_history(State(state): State<AppState>) -> impl IntoResponse {
    let csv = export_csv(state.history.lock().await.items());
    (
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{EXPORT_FILENAME}\""),
            ),
        ],
        csv,
    )
}
