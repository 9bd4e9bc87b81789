//! Command Handlers

mod batch_handlers;
mod seed_handlers;

pub use batch_handlers::CreateBatchHandler;
pub use seed_handlers::{SeedExampleBatchHandler, EXAMPLE_BATCH_TEXT};
