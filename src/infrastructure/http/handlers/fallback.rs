//! Fallback Handlers
//!
//! 未匹配路由与 panic 的统一 JSON 响应

use axum::response::{IntoResponse, Response};
use std::any::Any;

use crate::infrastructure::http::error::ApiError;

/// 未匹配任何路由
pub async fn route_not_found(uri: axum::http::Uri) -> ApiError {
    ApiError::NotFound(format!("No route for {}", uri.path()))
}

/// 处理器 panic 时返回 500
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    ApiError::Internal(format!("Handler panicked: {}", detail)).into_response()
}
