use crate::error::{StorageError, ThumbnailError};
use crate::pipeline::event::StorageEvent;
use crate::pipeline::{Outcome, ThumbnailPipeline};
use axum::{
    Json,
    extract::Extension,
    response::{IntoResponse, Response},
};
use http::StatusCode;
use serde::Serialize;
use std::sync::Arc;
use tracing::error;

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl ThumbnailError {
    /// 错误对应的 HTTP 状态码，交由投递方决定是否重新投递。
    pub fn status_code(&self) -> StatusCode {
        match self {
            ThumbnailError::Decode(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ThumbnailError::Storage(StorageError::NotFound { .. }) => StatusCode::NOT_FOUND,
            ThumbnailError::Storage(StorageError::Transient(_)) => StatusCode::SERVICE_UNAVAILABLE,
            ThumbnailError::Storage(StorageError::Rejected(_)) => StatusCode::BAD_GATEWAY,
            ThumbnailError::Encode(_) | ThumbnailError::Io(_) | ThumbnailError::Task(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ThumbnailError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

/// 处理对象上传通知。
///
/// 请求体是上传事件的 JSON，被过滤和成功生成都返回 200，
/// 失败时按错误类型返回对应状态码。
pub async fn handle_event(
    Extension(pipeline): Extension<Arc<ThumbnailPipeline>>,
    Json(event): Json<StorageEvent>,
) -> Result<Json<Outcome>, ThumbnailError> {
    match pipeline.process(&event).await {
        Ok(outcome) => Ok(Json(outcome)),
        Err(e) => {
            error!(bucket = %event.bucket, key = %event.name, error = %e, "缩略图生成失败");
            Err(e)
        }
    }
}
