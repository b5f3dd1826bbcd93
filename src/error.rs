//! 错误类型
//!
//! - [`ConfigError`]：启动阶段的配置错误
//! - [`StorageError`]：对象存储调用失败，区分可重试与不可重试
//! - [`ThumbnailError`]：一次事件处理中止的原因

use crate::utils::retry::Retryable;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("THUMBNAIL_SIZE 必须是正整数，实际为 `{0}`")]
    InvalidThumbnailSize(String),

    #[error("PORT 必须是合法端口号，实际为 `{0}`")]
    InvalidPort(String),
}

/// 对象存储错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// 源对象不存在，不重试
    #[error("对象不存在: {bucket}/{key}")]
    NotFound { bucket: String, key: String },

    /// 网络、服务端或限流错误，按退避策略重试
    #[error("存储暂时不可用: {0}")]
    Transient(String),

    /// 存储端明确拒绝（权限、参数等），不重试
    #[error("存储拒绝请求: {0}")]
    Rejected(String),
}

impl Retryable for StorageError {
    fn is_retryable(&self) -> bool {
        matches!(self, StorageError::Transient(_))
    }
}

/// 缩略图处理错误
#[derive(Debug, Error)]
pub enum ThumbnailError {
    /// 内容无法解码为图片，属于数据问题，不重试
    #[error("无法解码图片: {0}")]
    Decode(String),

    #[error("无法编码缩略图: {0}")]
    Encode(#[source] image::ImageError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("本地文件读写失败: {0}")]
    Io(#[from] std::io::Error),

    /// 阻塞线程池中的生成任务 panic 或被取消
    #[error("缩略图任务异常终止: {0}")]
    Task(#[from] tokio::task::JoinError),
}
