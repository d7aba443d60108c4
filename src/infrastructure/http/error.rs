//! HTTP Error Handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::ApplicationError;

/// 统一错误响应格式
///
/// 只返回固定文案，细节仅写入日志
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: u16,
    pub message: &'static str,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, message: &'static str) -> Self {
        Self {
            success: false,
            error: status.as_u16(),
            message,
        }
    }
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Unprocessable(String),
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "Bad Request",
            ApiError::NotFound(_) => "Not Found",
            ApiError::Unprocessable(_) => "Unprocessable",
            ApiError::Internal(_) => "Server Error",
        }
    }

    fn detail(&self) -> &str {
        match self {
            ApiError::BadRequest(msg)
            | ApiError::NotFound(msg)
            | ApiError::Unprocessable(msg)
            | ApiError::Internal(msg) => msg,
        }
    }

    /// 任何失败都按 404 返回（列表、删除接口）
    pub fn not_found_from(err: ApplicationError) -> Self {
        ApiError::NotFound(err.to_string())
    }

    /// 任何失败都按 422 返回（新增、搜索、测验接口）
    pub fn unprocessable_from(err: ApplicationError) -> Self {
        ApiError::Unprocessable(err.to_string())
    }

    /// 分类编号非法按 400，其余失败按 422
    pub fn from_category_lookup(err: ApplicationError) -> Self {
        match err {
            ApplicationError::InvalidCategory(id) => {
                ApiError::BadRequest(format!("Invalid category: {}", id))
            }
            other => ApiError::Unprocessable(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self.detail(), "Request failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %self.detail(), "Request rejected");
        }

        (status, Json(ErrorResponse::new(status, self.message()))).into_response()
    }
}
