//! 事件过滤
//!
//! 在任何 I/O 之前决定一个事件是否需要生成缩略图，全部是纯函数。

use crate::config::ThumbnailConfig;
use crate::pipeline::event::StorageEvent;
use serde::Serialize;

/// 跳过事件的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// 内容类型不是 `image/*`
    NotAnImage,
    /// 对象键已经带有缩略图标记，说明是本服务自己上传的缩略图
    AlreadyThumbnail,
    /// 扩展名不在允许列表中
    UnsupportedExtension,
}

/// 返回事件被跳过的原因，需要处理时返回 `None`。
///
/// 按以下顺序检查：
/// 1. 内容类型是否以 `image` 开头（忽略大小写）。
/// 2. 对象键中是否已包含缩略图标记。
/// 3. 扩展名（忽略大小写和开头的 `.`）是否受支持。
///
/// # 参数
///
/// * `event` - 上传事件。
/// * `extension` - 对象键的扩展名。
/// * `config` - 缩略图配置。
pub fn skip_reason(
    event: &StorageEvent,
    extension: &str,
    config: &ThumbnailConfig,
) -> Option<SkipReason> {
    if !event.content_type.to_ascii_lowercase().starts_with("image") {
        return Some(SkipReason::NotAnImage);
    }

    if event.name.contains(&config.suffix) {
        return Some(SkipReason::AlreadyThumbnail);
    }

    if !config.is_supported_extension(extension.trim_start_matches('.')) {
        return Some(SkipReason::UnsupportedExtension);
    }

    None
}

/// 判断事件是否需要生成缩略图。
pub fn should_process(event: &StorageEvent, extension: &str, config: &ThumbnailConfig) -> bool {
    skip_reason(event, extension, config).is_none()
}
