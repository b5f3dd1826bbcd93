use serde::Deserialize;

/// 对象存储上传事件
///
/// 只保留处理所需的字段，通知中的其它字段在反序列化时忽略。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageEvent {
    /// 对象键
    pub name: String,
    /// 存储桶名称
    pub bucket: String,
    /// MIME 类型，通知中缺失时为空字符串
    #[serde(default)]
    pub content_type: String,
}

impl StorageEvent {
    pub fn new(
        name: impl Into<String>,
        bucket: impl Into<String>,
        content_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            bucket: bucket.into(),
            content_type: content_type.into(),
        }
    }
}
