//! In-Memory Batch Repository
//!
//! 进程内的非持久化实现，用于演示和测试

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use crate::application::ports::{BatchRecord, BatchRepositoryPort, NewBatchRecord, RepositoryError};
use crate::domain::BatchId;

/// 内存历史存储
pub struct InMemoryBatchRepository {
    /// batch_id -> BatchRecord
    batches: DashMap<BatchId, BatchRecord>,
    /// 下一个分配的 ID，从 1 开始
    next_id: AtomicI64,
}

impl InMemoryBatchRepository {
    pub fn new() -> Self {
        Self {
            batches: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl Default for InMemoryBatchRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BatchRepositoryPort for InMemoryBatchRepository {
    async fn insert(&self, batch: NewBatchRecord) -> Result<BatchRecord, RepositoryError> {
        let id = BatchId::from_i64(self.next_id.fetch_add(1, Ordering::SeqCst));

        let record = BatchRecord {
            id,
            original_text: batch.original_text,
            processed_data: batch.processed_data,
            created_at: Utc::now(),
        };

        self.batches.insert(id, record.clone());
        tracing::debug!(batch_id = %id, "Batch stored in memory");

        Ok(record)
    }

    async fn find_all(&self) -> Result<Vec<BatchRecord>, RepositoryError> {
        let mut batches: Vec<BatchRecord> =
            self.batches.iter().map(|entry| entry.value().clone()).collect();

        batches.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        Ok(batches)
    }
}
