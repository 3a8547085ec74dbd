//! HTTP 错误映射
//!
//! 领域错误到 HTTP 状态码的唯一转换点

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storefront_errors::AppError;
use tracing::error;

/// 控制器错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// 404，无响应体
    NotFound,
    /// 400，无响应体
    BadRequest,
    /// 409，消息以纯文本返回
    Conflict(String),
    /// 500，无响应体；消息只写日志
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::NotFound(_) => Self::NotFound,
            AppError::Validation(_) => Self::BadRequest,
            AppError::Conflict(msg) => Self::Conflict(msg),
            AppError::Internal(msg) => Self::Internal(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Conflict(msg) => (StatusCode::CONFLICT, msg).into_response(),
            Self::Internal(msg) => {
                error!(error = %msg, "Request failed");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
            other => other.status_code().into_response(),
        }
    }
}
