//! Memory Layer - 内存存储实现

mod batch_repo;

pub use batch_repo::InMemoryBatchRepository;
