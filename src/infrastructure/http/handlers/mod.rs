//! HTTP Handlers

mod history;
mod ping;
mod split;

pub use history::*;
pub use ping::*;
pub use split::*;
