//! Queries - CQRS 读操作

pub mod handlers;
mod history_queries;

pub use history_queries::ListHistory;
