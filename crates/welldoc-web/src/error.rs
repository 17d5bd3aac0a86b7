//! 错误到HTTP响应的映射

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use welldoc_core::WelldocError;

/// HTTP层错误包装
#[derive(Debug)]
pub struct ApiError(pub WelldocError);

impl From<WelldocError> for ApiError {
    fn from(err: WelldocError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self.0 {
            WelldocError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            // 存储细节只写日志，不返回给调用方
            other => {
                tracing::error!(error = %other, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": true,
            "message": message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}
