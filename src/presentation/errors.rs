// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

use crate::domain::repositories::periodo_repository::RepositoryError;

/// 应用错误类型
///
/// 封装处理器中可能出现的错误，统一转换为 `{"error": ...}` 响应
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let error_message = self.0.to_string();

        let status = match self.0.downcast_ref::<RepositoryError>() {
            Some(RepositoryError::PoolExhausted) | Some(RepositoryError::Connection(_)) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            Some(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
            Some(RepositoryError::Query(_)) | None => StatusCode::INTERNAL_SERVER_ERROR,
        };

        error!(status = status.as_u16(), "Request failed: {}", error_message);

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
