//! Batch Command Handlers

use std::sync::Arc;

use crate::application::commands::CreateBatch;
use crate::application::error::ApplicationError;
use crate::application::ports::{BatchRecord, BatchRepositoryPort, NewBatchRecord};
use crate::domain::split_names;

/// CreateBatch Handler
///
/// 拆分与落库作为一个单元：只有插入成功才返回结果，失败时不产生任何历史记录
#[derive(Clone)]
pub struct CreateBatchHandler {
    batch_repo: Arc<dyn BatchRepositoryPort>,
}

impl CreateBatchHandler {
    pub fn new(batch_repo: Arc<dyn BatchRepositoryPort>) -> Self {
        Self { batch_repo }
    }

    pub async fn handle(&self, command: CreateBatch) -> Result<BatchRecord, ApplicationError> {
        let processed_data = split_names(&command.original_text);
        let records = processed_data.len();

        let batch = self
            .batch_repo
            .insert(NewBatchRecord {
                original_text: command.original_text,
                processed_data,
            })
            .await
            .map_err(|e| {
                tracing::error!(error = %e, records, "Failed to record split batch");
                ApplicationError::from(e)
            })?;

        tracing::info!(batch_id = %batch.id, records, "Split batch recorded");

        Ok(batch)
    }
}
