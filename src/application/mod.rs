//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（BatchRepository）
//! - commands: CQRS 命令及处理器（创建批次、示例数据）
//! - queries: CQRS 查询及处理器（历史列表）
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    handlers::{CreateBatchHandler, SeedExampleBatchHandler, EXAMPLE_BATCH_TEXT},
    CreateBatch, SeedExampleBatch,
};

pub use error::{ApplicationError, ValidationError};

pub use ports::{BatchRecord, BatchRepositoryPort, NewBatchRecord, RepositoryError};

pub use queries::{handlers::ListHistoryHandler, ListHistory};
