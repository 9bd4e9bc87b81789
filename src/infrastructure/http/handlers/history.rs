//! History HTTP Handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::ListHistory;
use crate::infrastructure::http::dto::BatchResponse;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 获取全部历史批次，最新在前
pub async fn list_history(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<BatchResponse>>, ApiError> {
    let batches = state.list_history_handler.handle(ListHistory).await?;

    Ok(Json(batches.into_iter().map(BatchResponse::from).collect()))
}
