//! 缩略图处理流水线
//!
//! 事件过滤 → 下载源对象 → 生成缩略图 → 上传缩略图。
//! 每次调用在临时目录中独占两个临时文件，无论成功还是失败都会在返回时删除。
//! 解码、缩放和编码在阻塞线程池中执行，不占用异步运行时的工作线程。

pub mod event;
pub mod filter;
pub mod generator;
pub mod naming;

use crate::config::ThumbnailConfig;
use crate::error::ThumbnailError;
use crate::s3::StorageGateway;
use crate::utils::path::split_extension;
use event::StorageEvent;
use filter::SkipReason;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::NamedTempFile;
use tracing::{info, instrument};

/// 一次事件处理的结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// 事件被过滤，未做任何 I/O
    Skipped { reason: SkipReason },
    /// 缩略图已上传
    Generated {
        key: String,
        content_type: String,
        width: u32,
        height: u32,
    },
}

pub struct ThumbnailPipeline {
    config: Arc<ThumbnailConfig>,
    gateway: StorageGateway,
    temp_dir: PathBuf,
}

impl ThumbnailPipeline {
    /// 临时文件放在系统临时目录（`TMPDIR`）中。
    pub fn new(config: Arc<ThumbnailConfig>, gateway: StorageGateway) -> Self {
        Self {
            config,
            gateway,
            temp_dir: std::env::temp_dir(),
        }
    }

    /// 指定存放临时文件的目录，目录需已存在。
    pub fn with_temp_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.temp_dir = dir.into();
        self
    }

    /// 处理一个上传事件。
    ///
    /// # 参数
    ///
    /// * `event` - 上传事件。
    ///
    /// # 返回值
    ///
    /// 被过滤时返回 [`Outcome::Skipped`]，否则返回上传的缩略图信息。
    ///
    /// # Errors
    ///
    /// 解码失败、源对象不存在、存储重试用尽、本地文件读写失败或生成任务 panic 时返回错误，
    /// 出错时不会上传任何内容。
    #[instrument(skip(self, event), fields(bucket = %event.bucket, key = %event.name))]
    pub async fn process(&self, event: &StorageEvent) -> Result<Outcome, ThumbnailError> {
        let (_, extension) = split_extension(&event.name);

        if let Some(reason) = filter::skip_reason(event, extension, &self.config) {
            info!(?reason, content_type = %event.content_type, "跳过事件");
            return Ok(Outcome::Skipped { reason });
        }

        info!(content_type = %event.content_type, "开始生成缩略图");

        let source_file = NamedTempFile::new_in(&self.temp_dir)?;
        let thumb_file = NamedTempFile::new_in(&self.temp_dir)?;

        self.gateway
            .download(&event.bucket, &event.name, source_file.path())
            .await?;

        // 临时文件随任务移入阻塞线程，调用方中途取消时由任务结束后删除
        let config = Arc::clone(&self.config);
        let (thumb_file, generated) = tokio::task::spawn_blocking(move || {
            let generated = generator::generate(source_file.path(), thumb_file.path(), &config);
            (thumb_file, generated)
        })
        .await?;
        let generated = generated?;

        let key = naming::thumbnail_name(&event.name, extension, &self.config);
        let content_type = generated.content_type();

        self.gateway
            .upload(&event.bucket, &key, thumb_file.path(), &content_type)
            .await?;

        info!(
            thumbnail = %key,
            width = generated.width,
            height = generated.height,
            "缩略图生成完成"
        );

        Ok(Outcome::Generated {
            key,
            content_type,
            width: generated.width,
            height: generated.height,
        })
    }
}
