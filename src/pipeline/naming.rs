use crate::config::ThumbnailConfig;
use crate::utils::path::split_extension;

/// 根据源对象键生成缩略图对象键：`<stem><suffix>.<extension>`。
///
/// 主干按最后一个路径段中的最后一个 `.` 截取，`my.photo.v2.jpg`
/// 的主干是 `my.photo.v2`。
///
/// # 参数
///
/// * `source_key` - 源对象键。
/// * `extension` - 写入缩略图键的扩展名。
/// * `config` - 缩略图配置，提供后缀。
pub fn thumbnail_name(source_key: &str, extension: &str, config: &ThumbnailConfig) -> String {
    let (stem, _) = split_extension(source_key);
    format!(
        "{}{}.{}",
        stem,
        config.suffix,
        extension.trim_start_matches('.')
    )
}
