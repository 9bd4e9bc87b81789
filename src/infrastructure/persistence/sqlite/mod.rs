//! SQLite Persistence - SQLite 数据库持久化实现

mod batch_repo;
mod database;

pub use batch_repo::*;
pub use database::*;
