//! 存储网关
//!
//! 在 [`StorageBackend`] 之上提供下载到本地文件、从本地文件上传两个操作，
//! 每个操作独立套用同一个 [`RetryPolicy`]。

use crate::error::ThumbnailError;
use crate::s3::backend::StorageBackend;
use crate::utils::retry::RetryPolicy;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Clone)]
pub struct StorageGateway {
    backend: Arc<dyn StorageBackend>,
    retry: RetryPolicy,
}

impl StorageGateway {
    pub fn new(backend: Arc<dyn StorageBackend>, retry: RetryPolicy) -> Self {
        Self { backend, retry }
    }

    /// 下载对象到本地文件。
    ///
    /// # 参数
    ///
    /// * `bucket` - 存储桶名称。
    /// * `key` - 对象键。
    /// * `dest` - 写入的本地路径。
    ///
    /// # 返回值
    ///
    /// 下载的字节数。
    ///
    /// # Errors
    ///
    /// 对象不存在时返回 `StorageError::NotFound`，暂时性错误在重试用尽后返回。
    pub async fn download(
        &self,
        bucket: &str,
        key: &str,
        dest: &Path,
    ) -> Result<usize, ThumbnailError> {
        let data = self
            .retry
            .run("download", || self.backend.get_object(bucket, key))
            .await?;

        tokio::fs::write(dest, &data).await?;
        debug!(bucket, key, size_bytes = data.len(), "源对象已下载");
        Ok(data.len())
    }

    /// 将本地文件上传为对象。
    ///
    /// # 参数
    ///
    /// * `bucket` - 存储桶名称。
    /// * `key` - 对象键。
    /// * `src` - 待上传的本地路径。
    /// * `content_type` - 对象的内容类型。
    pub async fn upload(
        &self,
        bucket: &str,
        key: &str,
        src: &Path,
        content_type: &str,
    ) -> Result<(), ThumbnailError> {
        let data = tokio::fs::read(src).await?;
        let size_bytes = data.len();

        self.retry
            .run("upload", || {
                self.backend
                    .put_object(bucket, key, data.clone(), content_type)
            })
            .await?;

        info!(bucket, key, content_type, size_bytes, "缩略图已上传");
        Ok(())
    }
}
