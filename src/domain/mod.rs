//! Domain Layer - 领域层
//!
//! - name_splitter: 纯函数姓名拆分
//! - history: 历史批次值对象

mod history;
mod name_splitter;

pub use history::BatchId;
pub use name_splitter::{split_line, split_names, NameRecord};
