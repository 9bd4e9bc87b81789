//! HTTP Error Handling

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::{ApplicationError, ValidationError};

/// 错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// 存储失败时返回给客户端的通用信息，详情只写日志
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    BadRequest {
        message: String,
        field: Option<String>,
    },
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, response) = match self {
            ApiError::BadRequest { message, field } => {
                tracing::warn!(error = %message, field = ?field, "Bad request");
                (StatusCode::BAD_REQUEST, ErrorResponse { message, field })
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        message: INTERNAL_ERROR_MESSAGE.to_string(),
                        field: None,
                    },
                )
            }
        };

        (status, Json(response)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        ApiError::BadRequest {
            message: e.message,
            field: e.field,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(e: JsonRejection) -> Self {
        ApiError::BadRequest {
            message: e.body_text(),
            field: None,
        }
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::StorageFailure(msg) => ApiError::Internal(msg),
        }
    }
}
