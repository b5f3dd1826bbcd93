//! 缩略图生成器的配置模块。
//!
//! 该模块在进程启动时从环境变量加载一次配置，之后以引用的方式传入各组件，不再修改。

use crate::error::ConfigError;
use std::collections::BTreeSet;
use std::env;

/// 缩略图尺寸的环境变量名
pub const THUMBNAIL_SIZE_VAR: &str = "THUMBNAIL_SIZE";

/// 监听端口的环境变量名
pub const PORT_VAR: &str = "PORT";

/// 默认缩略图最大边长（像素）
pub const DEFAULT_THUMBNAIL_SIZE: u32 = 128;

/// 默认监听端口
pub const DEFAULT_PORT: u16 = 8080;

/// 支持生成缩略图的源文件扩展名（小写）
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// 缩略图配置
///
/// * `max_dimension` - 缩略图宽高的上限。
/// * `suffix` - 缩略图文件名标记，形如 `_thumb128`，同时用于识别已生成的缩略图。
/// * `supported_extensions` - 允许处理的小写扩展名集合。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbnailConfig {
    pub max_dimension: u32,
    pub suffix: String,
    pub supported_extensions: BTreeSet<String>,
}

impl ThumbnailConfig {
    /// 以指定的最大边长创建配置。
    ///
    /// # 参数
    ///
    /// * `max_dimension` - 缩略图宽高的上限，必须为正数。
    ///
    /// # Errors
    ///
    /// 当 `max_dimension` 为 0 时返回 [`ConfigError::InvalidThumbnailSize`]。
    pub fn new(max_dimension: u32) -> Result<Self, ConfigError> {
        if max_dimension == 0 {
            return Err(ConfigError::InvalidThumbnailSize(max_dimension.to_string()));
        }

        Ok(Self::with_dimension(max_dimension))
    }

    fn with_dimension(max_dimension: u32) -> Self {
        Self {
            max_dimension,
            suffix: format!("_thumb{}", max_dimension),
            supported_extensions: SUPPORTED_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
        }
    }

    /// 从 `THUMBNAIL_SIZE` 环境变量加载配置，未设置时使用默认值 128。
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_value(env::var(THUMBNAIL_SIZE_VAR).ok().as_deref())
    }

    /// 解析 `THUMBNAIL_SIZE` 的原始值。
    ///
    /// 空值与未设置等价，其余非正整数的值都视为配置错误。
    pub fn from_value(value: Option<&str>) -> Result<Self, ConfigError> {
        let max_dimension = match value.map(str::trim) {
            None | Some("") => DEFAULT_THUMBNAIL_SIZE,
            Some(raw) => raw
                .parse::<u32>()
                .map_err(|_| ConfigError::InvalidThumbnailSize(raw.to_string()))?,
        };

        Self::new(max_dimension)
    }

    /// 判断扩展名是否在允许列表中（忽略大小写）。
    pub fn is_supported_extension(&self, extension: &str) -> bool {
        self.supported_extensions
            .contains(&extension.to_lowercase())
    }
}

impl Default for ThumbnailConfig {
    fn default() -> Self {
        Self::with_dimension(DEFAULT_THUMBNAIL_SIZE)
    }
}

/// HTTP 触发端点的服务配置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
}

impl ServerConfig {
    /// 从 `PORT` 环境变量加载，未设置时使用 8080。
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match env::var(PORT_VAR) {
            Ok(raw) if !raw.trim().is_empty() => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            _ => DEFAULT_PORT,
        };

        Ok(Self { port })
    }

    /// 监听地址
    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
