//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

/// 输入校验错误
///
/// `field` 指向出错的请求字段（如 `names`），整体格式错误时为空
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
    pub field: Option<String>,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field: None,
        }
    }

    pub fn for_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field: Some(field.into()),
        }
    }
}

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 持久化不可用或写入被拒绝，不在本层重试
    #[error("Storage failure: {0}")]
    StorageFailure(String),
}

impl From<crate::application::ports::RepositoryError> for ApplicationError {
    fn from(err: crate::application::ports::RepositoryError) -> Self {
        Self::StorageFailure(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::RepositoryError;

    #[test]
    fn test_repository_error_becomes_storage_failure() {
        let err: ApplicationError = RepositoryError::DatabaseError("disk I/O error".into()).into();
        assert!(matches!(err, ApplicationError::StorageFailure(msg) if msg.contains("disk I/O error")));
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::for_field("names", "Required");
        assert_eq!(err.to_string(), "Required");
        assert_eq!(err.field.as_deref(), Some("names"));
    }
}
