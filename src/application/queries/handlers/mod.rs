//! Query Handlers

mod history_handlers;

pub use history_handlers::ListHistoryHandler;
