//! Data Transfer Objects
//!
//! 请求校验与响应结构；JSON 字段使用 camelCase

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::application::{BatchRecord, ValidationError};
use crate::domain::{BatchId, NameRecord};

// ============================================================================
// Process
// ============================================================================

/// `POST /api/process` 请求体
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessRequest {
    pub names: String,
}

/// JSON 值的类型名，用于错误信息
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl ProcessRequest {
    /// 校验请求体，在任何业务逻辑之前执行
    pub fn validate(body: &Value) -> Result<Self, ValidationError> {
        let object = body.as_object().ok_or_else(|| {
            ValidationError::new(format!("Expected object, received {}", json_type_name(body)))
        })?;

        match object.get("names") {
            None => Err(ValidationError::for_field("names", "Required")),
            Some(Value::String(names)) => Ok(Self {
                names: names.clone(),
            }),
            Some(other) => Err(ValidationError::for_field(
                "names",
                format!("Expected string, received {}", json_type_name(other)),
            )),
        }
    }
}

/// `POST /api/process` 响应
#[derive(Debug, Serialize)]
pub struct ProcessResponse {
    pub original: String,
    pub results: Vec<NameRecord>,
}

impl From<BatchRecord> for ProcessResponse {
    fn from(batch: BatchRecord) -> Self {
        Self {
            original: batch.original_text,
            results: batch.processed_data,
        }
    }
}

// ============================================================================
// History
// ============================================================================

/// 历史批次
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchResponse {
    pub id: BatchId,
    pub original_text: String,
    pub processed_data: Vec<NameRecord>,
    pub created_at: String,
}

fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl From<BatchRecord> for BatchResponse {
    fn from(batch: BatchRecord) -> Self {
        Self {
            id: batch.id,
            original_text: batch.original_text,
            processed_data: batch.processed_data,
            created_at: format_timestamp(&batch.created_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_validate_accepts_string() {
        let request = ProcessRequest::validate(&json!({"names": "John Doe"})).unwrap();
        assert_eq!(request.names, "John Doe");
    }

    #[test]
    fn test_validate_accepts_empty_string() {
        let request = ProcessRequest::validate(&json!({"names": ""})).unwrap();
        assert_eq!(request.names, "");
    }

    #[test]
    fn test_validate_missing_names() {
        let err = ProcessRequest::validate(&json!({})).unwrap_err();
        assert_eq!(err, ValidationError::for_field("names", "Required"));
    }

    #[test]
    fn test_validate_null_names() {
        let err = ProcessRequest::validate(&json!({"names": null})).unwrap_err();
        assert_eq!(
            err,
            ValidationError::for_field("names", "Expected string, received null")
        );
    }

    #[test]
    fn test_validate_wrong_type() {
        let err = ProcessRequest::validate(&json!({"names": 42})).unwrap_err();
        assert_eq!(
            err,
            ValidationError::for_field("names", "Expected string, received number")
        );

        let err = ProcessRequest::validate(&json!({"names": ["John Doe"]})).unwrap_err();
        assert_eq!(err.message, "Expected string, received array");
    }

    #[test]
    fn test_validate_non_object_body() {
        let err = ProcessRequest::validate(&json!("John Doe")).unwrap_err();
        assert_eq!(err, ValidationError::new("Expected object, received string"));
    }

    #[test]
    fn test_batch_response_shape() {
        let batch = BatchRecord {
            id: BatchId::from_i64(7),
            original_text: "Cher".into(),
            processed_data: crate::domain::split_names("Cher"),
            created_at: Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
        };

        let value = serde_json::to_value(BatchResponse::from(batch)).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 7,
                "originalText": "Cher",
                "processedData": [{"original": "Cher", "firstName": "Cher", "lastName": ""}],
                "createdAt": "2024-01-02T03:04:05.000Z"
            })
        );
    }
}
