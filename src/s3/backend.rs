//! 对象存储后端
//!
//! [`StorageBackend`] 抽象了按键读写对象的能力，[`S3Backend`] 是基于 `aws-sdk-s3` 的实现。
//! 每个方法只发起一次调用，重试由 [`crate::s3::gateway::StorageGateway`] 负责。

use crate::error::StorageError;
use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::http::HttpResponse;
use aws_sdk_s3::error::{DisplayErrorContext, SdkError};
use aws_sdk_s3::primitives::ByteStream;
use std::sync::Arc;

/// 按键读写对象的能力
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// 读取对象的全部内容。
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>, StorageError>;

    /// 写入对象。
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StorageError>;
}

/// 基于 S3 的存储后端
#[derive(Clone)]
pub struct S3Backend {
    client: Arc<Client>,
}

impl S3Backend {
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }
}

/// 按 HTTP 状态码对存储错误分类。
///
/// - 408、429 和 5xx 视为暂时性错误
/// - 其余 4xx（包括上传时桶不存在的 404）视为存储端拒绝
/// - 没有响应（超时、连接失败等）视为暂时性错误
///
/// 读取时的 404 由 [`S3Backend::get_object`] 单独映射为对象不存在。
fn classify<E>(err: SdkError<E, HttpResponse>) -> StorageError
where
    E: std::error::Error + Send + Sync + 'static,
{
    let status = err.raw_response().map(|response| response.status().as_u16());
    let message = DisplayErrorContext(&err).to_string();

    match status {
        Some(408 | 429) => StorageError::Transient(message),
        Some(code) if (400..500).contains(&code) => StorageError::Rejected(message),
        Some(_) => StorageError::Transient(message),
        None if matches!(err, SdkError::ConstructionFailure(_)) => {
            StorageError::Rejected(message)
        }
        None => StorageError::Transient(message),
    }
}

#[async_trait]
impl StorageBackend for S3Backend {
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>, StorageError> {
        let output = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|err| match err.raw_response().map(|r| r.status().as_u16()) {
                Some(404) => StorageError::NotFound {
                    bucket: bucket.to_string(),
                    key: key.to_string(),
                },
                _ => classify(err),
            })?;

        let data = output
            .body
            .collect()
            .await
            .map_err(|err| StorageError::Transient(err.to_string()))?;

        Ok(data.into_bytes().to_vec())
    }

    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StorageError> {
        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(body))
            .send()
            .await
            .map_err(classify)?;

        Ok(())
    }
}
