//! Application State
//!
//! 进程启动时构造一次，以 `Arc` 共享给所有请求

use std::sync::Arc;

use crate::application::{BatchRepositoryPort, CreateBatchHandler, ListHistoryHandler};

/// 应用状态
pub struct AppState {
    // ========== Command Handlers ==========
    pub create_batch_handler: CreateBatchHandler,

    // ========== Query Handlers ==========
    pub list_history_handler: ListHistoryHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(batch_repo: Arc<dyn BatchRepositoryPort>) -> Self {
        Self {
            create_batch_handler: CreateBatchHandler::new(batch_repo.clone()),
            list_history_handler: ListHistoryHandler::new(batch_repo),
        }
    }
}
