//! Fallback Handlers
//!
//! 未匹配的路径与不支持的方法也返回统一错误体

use axum::http::{Method, Uri};

use crate::infrastructure::http::error::ApiError;

/// 未匹配任何路由
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("no route for {}", uri.path()))
}

/// 路由存在但方法不支持
pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::MethodNotAllowed(format!("method {} not allowed on {}", method, uri.path()))
}
