//! Split HTTP Handlers

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde_json::Value;
use std::sync::Arc;

use crate::application::CreateBatch;
use crate::infrastructure::http::dto::{ProcessRequest, ProcessResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 拆分姓名并写入历史
///
/// 请求体先校验，校验失败不写历史；写入失败时不返回拆分结果
pub async fn process_names(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ProcessResponse>, ApiError> {
    let Json(body) = payload?;
    let request = ProcessRequest::validate(&body)?;

    tracing::debug!(lines = request.names.lines().count(), "Processing names");

    let batch = state
        .create_batch_handler
        .handle(CreateBatch {
            original_text: request.names,
        })
        .await?;

    Ok(Json(ProcessResponse::from(batch)))
}
