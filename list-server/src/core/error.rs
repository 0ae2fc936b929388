//! 统一错误处理
//!
//! | 变体 | 状态码 | 响应体 |
//! |------|--------|--------|
//! | Validation | 400 | `{"error"}` |
//! | Conflict | 409 | `{"error", "currentState", "received"}` |
//! | Internal | 500 | `{"error"}` (细节只写日志) |

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use shared::response::{ConflictBody, ErrorBody};
use thiserror::Error;

use crate::ordering::OrderingError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("Conflict: expected range not found in current order")]
    Conflict {
        current_state: Vec<u32>,
        received: Vec<u32>,
    },

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(anyhow::anyhow!(msg.into()))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            AppError::Validation(msg) => (status, Json(ErrorBody { error: msg })).into_response(),
            AppError::Conflict {
                current_state,
                received,
            } => {
                let body = ConflictBody {
                    error: "Conflict: expected range not found in current order".to_string(),
                    current_state,
                    received,
                };
                (status, Json(body)).into_response()
            }
            AppError::Internal(err) => {
                // 记录内部错误但不暴露详细信息
                tracing::error!(error = ?err, "Internal server error");
                let body = ErrorBody {
                    error: "Internal server error".to_string(),
                };
                (status, Json(body)).into_response()
            }
        }
    }
}

impl From<OrderingError> for AppError {
    fn from(err: OrderingError) -> Self {
        match err {
            OrderingError::Validation(msg) => AppError::Validation(msg),
            OrderingError::Conflict { expected, current } => AppError::Conflict {
                current_state: current,
                received: expected,
            },
            OrderingError::Catalog(e) => AppError::Internal(e.into()),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(format!("Invalid JSON body: {}", rejection.body_text()))
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Validation(format!("Invalid query string: {}", rejection.body_text()))
    }
}

/// 处理器的 Result 类型别名
pub type Result<T> = std::result::Result<T, AppError>;
