//! Repository Ports - 出站端口
//!
//! 定义拆分历史持久化的抽象接口
//! 具体实现在 infrastructure 层（SQLite / 内存）

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::domain::{BatchId, NameRecord};

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

// ============================================================================
// Batch Repository
// ============================================================================

/// 待插入的历史批次（id 与 created_at 由存储层分配）
#[derive(Debug, Clone)]
pub struct NewBatchRecord {
    pub original_text: String,
    pub processed_data: Vec<NameRecord>,
}

/// 已持久化的历史批次，创建后不可变
#[derive(Debug, Clone, PartialEq)]
pub struct BatchRecord {
    pub id: BatchId,
    pub original_text: String,
    pub processed_data: Vec<NameRecord>,
    pub created_at: DateTime<Utc>,
}

/// Batch Repository Port
///
/// 只追加：不提供 update / delete
#[async_trait]
pub trait BatchRepositoryPort: Send + Sync {
    /// 插入批次，返回分配了 id 和 created_at 的记录
    async fn insert(&self, batch: NewBatchRecord) -> Result<BatchRecord, RepositoryError>;

    /// 获取全部批次，按 created_at 倒序，相同时按 id 倒序
    async fn find_all(&self) -> Result<Vec<BatchRecord>, RepositoryError>;
}
