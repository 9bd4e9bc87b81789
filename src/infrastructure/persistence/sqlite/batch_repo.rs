//! SQLite Batch Repository
//!
//! `split_history` 表，processed_data 列保存 NameRecord 数组的 JSON

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

use super::DbPool;
use crate::application::ports::{BatchRecord, BatchRepositoryPort, NewBatchRecord, RepositoryError};
use crate::domain::{BatchId, NameRecord};

/// SQLite Batch Repository
pub struct SqliteBatchRepository {
    pool: DbPool,
}

impl SqliteBatchRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct BatchRow {
    id: i64,
    original_text: String,
    processed_data: String,
    created_at: String,
}

fn parse_created_at(value: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::SerializationError(e.to_string()))
}

impl TryFrom<BatchRow> for BatchRecord {
    type Error = RepositoryError;

    fn try_from(row: BatchRow) -> Result<Self, Self::Error> {
        let processed_data: Vec<NameRecord> = serde_json::from_str(&row.processed_data)
            .map_err(|e| RepositoryError::SerializationError(e.to_string()))?;

        Ok(BatchRecord {
            id: BatchId::from_i64(row.id),
            original_text: row.original_text,
            processed_data,
            created_at: parse_created_at(&row.created_at)?,
        })
    }
}

#[async_trait]
impl BatchRepositoryPort for SqliteBatchRepository {
    async fn insert(&self, batch: NewBatchRecord) -> Result<BatchRecord, RepositoryError> {
        let processed_json = serde_json::to_string(&batch.processed_data)
            .map_err(|e| RepositoryError::SerializationError(e.to_string()))?;

        // 单条语句完成插入并取回分配的 id / created_at
        let (id, created_at): (i64, String) = sqlx::query_as(
            r#"
            INSERT INTO split_history (original_text, processed_data)
            VALUES (?, ?)
            RETURNING id, created_at
            "#,
        )
        .bind(&batch.original_text)
        .bind(&processed_json)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(BatchRecord {
            id: BatchId::from_i64(id),
            original_text: batch.original_text,
            processed_data: batch.processed_data,
            created_at: parse_created_at(&created_at)?,
        })
    }

    async fn find_all(&self) -> Result<Vec<BatchRecord>, RepositoryError> {
        let rows: Vec<BatchRow> = sqlx::query_as(
            r#"
            SELECT id, original_text, processed_data, created_at
            FROM split_history
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(BatchRecord::try_from).collect()
    }
}
