use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use tracing::error;

use crate::error::{AppError, DictError};

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl AppError {
    /// 对应的 HTTP 状态码
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Request(_) => StatusCode::BAD_REQUEST,
            AppError::Dict(DictError::InvalidExamType { .. } | DictError::InvalidChapter { .. }) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Dict(DictError::NotFound { .. } | DictError::ParseFailed { .. }) => {
                StatusCode::NOT_FOUND
            }
            AppError::Task(_) | AppError::Config(_) | AppError::Other(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            AppError::Request(e) => e.to_string(),
            AppError::Dict(DictError::ParseFailed { exam, .. }) => {
                format!("Dictionary for {} not found", exam)
            }
            AppError::Dict(e) => e.to_string(),
            // 内部错误不把细节返回给调用方
            _ => {
                error!("Error: {}", self);
                "Internal server error".to_string()
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
