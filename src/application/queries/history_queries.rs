//! History Queries

/// 列出全部历史批次（最新在前）
#[derive(Debug, Clone, Default)]
pub struct ListHistory;
