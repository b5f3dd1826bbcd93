/// 将对象键拆分为主干和扩展名
///
/// 只在最后一个路径段内按最后一个 `.` 拆分，目录部分原样保留在主干中；
/// 扩展名保持原有大小写。
///
/// # 参数
///
/// * `key` - 对象键或文件路径
///
/// # 返回值
///
/// `(主干, 扩展名)`，没有扩展名时扩展名为空字符串
///
/// # 示例
///
/// ```
/// use thumbnail_generator::utils::path::split_extension;
///
/// assert_eq!(split_extension("photo.png"), ("photo", "png"));
/// assert_eq!(split_extension("my.photo.v2.JPG"), ("my.photo.v2", "JPG"));
/// assert_eq!(split_extension("albums.2024/cat"), ("albums.2024/cat", ""));
/// assert_eq!(split_extension(".hidden"), (".hidden", ""));
/// ```
pub fn split_extension(key: &str) -> (&str, &str) {
    let name_start = key.rfind('/').map_or(0, |idx| idx + 1);
    let name = &key[name_start..];

    match name.rfind('.') {
        // 以点开头的隐藏文件没有扩展名
        Some(0) | None => (key, ""),
        Some(dot) => {
            let split_at = name_start + dot;
            (&key[..split_at], &key[split_at + 1..])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_extension() {
        assert_eq!(split_extension("photo.png"), ("photo", "png"));
        assert_eq!(split_extension("a/b/photo.jpeg"), ("a/b/photo", "jpeg"));
        assert_eq!(split_extension("my.photo.v2.jpg"), ("my.photo.v2", "jpg"));
        assert_eq!(split_extension("dir.v1/photo"), ("dir.v1/photo", ""));
        assert_eq!(split_extension("photo."), ("photo", ""));
        assert_eq!(split_extension(""), ("", ""));
    }
}
