//! HTTP Routes
//!
//! API Endpoints:
//! - /api/process   POST  拆分姓名并写入历史
//! - /api/history   GET   历史列表（最新在前）
//! - /api/ping      GET   健康检查

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .route("/process", post(handlers::process_names))
        .route("/history", get(handlers::list_history))
}
