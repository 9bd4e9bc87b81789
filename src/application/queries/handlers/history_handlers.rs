//! History Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{BatchRecord, BatchRepositoryPort};
use crate::application::queries::ListHistory;

/// ListHistory Handler
///
/// 无缓存，每次读取最新已提交的数据
pub struct ListHistoryHandler {
    batch_repo: Arc<dyn BatchRepositoryPort>,
}

impl ListHistoryHandler {
    pub fn new(batch_repo: Arc<dyn BatchRepositoryPort>) -> Self {
        Self { batch_repo }
    }

    pub async fn handle(&self, _query: ListHistory) -> Result<Vec<BatchRecord>, ApplicationError> {
        let batches = self.batch_repo.find_all().await?;
        tracing::debug!(count = batches.len(), "History listed");
        Ok(batches)
    }
}
