//! Splitter - 姓名批量拆分服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - 姓名拆分器（纯函数）
//! - 历史批次值对象
//!
//! 应用层 (application/):
//! - Ports: BatchRepository
//! - Commands: 创建批次、启动示例数据
//! - Queries: 历史列表
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API + 静态前端
//! - Persistence: SQLite 存储
//! - Memory: 内存存储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
