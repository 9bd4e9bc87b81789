//! Seed Command Handler - 首次启动时填充示例历史

use std::sync::Arc;

use crate::application::commands::{CreateBatch, SeedExampleBatch};
use crate::application::error::ApplicationError;
use crate::application::ports::{BatchRecord, BatchRepositoryPort};

use super::CreateBatchHandler;

/// 示例批次文本
pub const EXAMPLE_BATCH_TEXT: &str = "John Doe\nJane Smith\nBob Johnson";

/// SeedExampleBatch Handler
///
/// 通过 `CreateBatchHandler` 写入，不绕过正常的创建流程
pub struct SeedExampleBatchHandler {
    batch_repo: Arc<dyn BatchRepositoryPort>,
    create_batch: CreateBatchHandler,
}

impl SeedExampleBatchHandler {
    pub fn new(batch_repo: Arc<dyn BatchRepositoryPort>) -> Self {
        Self {
            create_batch: CreateBatchHandler::new(batch_repo.clone()),
            batch_repo,
        }
    }

    /// 历史为空时创建示例批次；已有历史时返回 `None`
    pub async fn handle(
        &self,
        _command: SeedExampleBatch,
    ) -> Result<Option<BatchRecord>, ApplicationError> {
        if !self.batch_repo.find_all().await?.is_empty() {
            tracing::debug!("History not empty, skipping example batch");
            return Ok(None);
        }

        let batch = self
            .create_batch
            .handle(CreateBatch {
                original_text: EXAMPLE_BATCH_TEXT.to_string(),
            })
            .await?;

        tracing::info!(batch_id = %batch.id, "Seeded example batch");

        Ok(Some(batch))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::InMemoryBatchRepository;

    #[tokio::test]
    async fn test_seed_on_empty_history() {
        let repo = Arc::new(InMemoryBatchRepository::new());
        let handler = SeedExampleBatchHandler::new(repo.clone());

        assert!(repo.find_all().await.unwrap().is_empty());

        let seeded = handler.handle(SeedExampleBatch).await.unwrap().unwrap();
        assert_eq!(seeded.original_text, EXAMPLE_BATCH_TEXT);
        assert_eq!(seeded.processed_data.len(), 3);
        assert_eq!(seeded.processed_data[2].first_name, "Bob");
        assert_eq!(seeded.processed_data[2].last_name, "Johnson");

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn test_seed_runs_only_once() {
        let repo = Arc::new(InMemoryBatchRepository::new());
        let handler = SeedExampleBatchHandler::new(repo.clone());

        assert!(handler.handle(SeedExampleBatch).await.unwrap().is_some());
        assert!(handler.handle(SeedExampleBatch).await.unwrap().is_none());
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_seed_skipped_when_history_exists() {
        let repo = Arc::new(InMemoryBatchRepository::new());
        CreateBatchHandler::new(repo.clone())
            .handle(CreateBatch {
                original_text: "Ada Lovelace".to_string(),
            })
            .await
            .unwrap();

        let seeded = SeedExampleBatchHandler::new(repo.clone())
            .handle(SeedExampleBatch)
            .await
            .unwrap();

        assert!(seeded.is_none());
        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].original_text, "Ada Lovelace");
    }
}
