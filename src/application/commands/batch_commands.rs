//! Batch Commands

/// 拆分并记录一批姓名
#[derive(Debug, Clone)]
pub struct CreateBatch {
    pub original_text: String,
}

/// 历史为空时写入示例批次（启动时执行一次）
#[derive(Debug, Clone, Default)]
pub struct SeedExampleBatch;
