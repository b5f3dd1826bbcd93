//! 缩略图生成
//!
//! 解码源图片，按最大边长等比缩小，再以源格式编码写出。

use crate::config::ThumbnailConfig;
use crate::error::ThumbnailError;
use image::imageops::FilterType;
use image::io::Reader as ImageReader;
use image::{DynamicImage, GenericImageView, ImageFormat};
use std::path::Path;

/// 生成结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratedThumbnail {
    /// 从源内容检测到的格式，缩略图使用同一格式编码
    pub format: ImageFormat,
    pub width: u32,
    pub height: u32,
}

impl GeneratedThumbnail {
    /// 上传时使用的内容类型，例如 `image/png`
    pub fn content_type(&self) -> String {
        content_type_for(self.format)
    }
}

/// 根据图片格式推断 MIME 类型。
pub fn content_type_for(format: ImageFormat) -> String {
    format
        .extensions_str()
        .first()
        .map(|ext| mime_guess::from_ext(ext).first_or_octet_stream().to_string())
        .unwrap_or_else(|| mime_guess::mime::APPLICATION_OCTET_STREAM.to_string())
}

/// 将图片缩小到宽高都不超过 `max_dimension`，保持宽高比，不放大。
pub fn fit_within(image: DynamicImage, max_dimension: u32) -> DynamicImage {
    let (width, height) = image.dimensions();
    if width <= max_dimension && height <= max_dimension {
        return image;
    }

    image.resize(max_dimension, max_dimension, FilterType::Lanczos3)
}

/// 读取源图片文件并生成缩略图文件。
///
/// 格式按文件内容检测而不是扩展名，缩略图沿用源格式。
///
/// # 参数
///
/// * `source` - 源图片的本地路径。
/// * `dest` - 缩略图写出的本地路径。
/// * `config` - 缩略图配置。
///
/// # Errors
///
/// - 内容无法识别或解码时返回 [`ThumbnailError::Decode`]
/// - 编码失败时返回 [`ThumbnailError::Encode`]
/// - 读取源文件失败时返回 [`ThumbnailError::Io`]
pub fn generate(
    source: &Path,
    dest: &Path,
    config: &ThumbnailConfig,
) -> Result<GeneratedThumbnail, ThumbnailError> {
    let reader = ImageReader::open(source)?.with_guessed_format()?;
    let format = reader
        .format()
        .ok_or_else(|| ThumbnailError::Decode("无法识别的图片格式".to_string()))?;

    let image = reader
        .decode()
        .map_err(|e| ThumbnailError::Decode(e.to_string()))?;

    let thumbnail = fit_within(image, config.max_dimension);
    thumbnail
        .save_with_format(dest, format)
        .map_err(ThumbnailError::Encode)?;

    let (width, height) = thumbnail.dimensions();
    Ok(GeneratedThumbnail {
        format,
        width,
        height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use tempfile::NamedTempFile;

    fn write_fixture(width: u32, height: u32, format: ImageFormat) -> NamedTempFile {
        let file = NamedTempFile::new().unwrap();
        let image = RgbImage::from_pixel(width, height, Rgb([200, 30, 90]));
        DynamicImage::ImageRgb8(image)
            .save_with_format(file.path(), format)
            .unwrap();
        file
    }

    fn read_back(path: &Path) -> (ImageFormat, u32, u32) {
        let reader = ImageReader::open(path).unwrap().with_guessed_format().unwrap();
        let format = reader.format().unwrap();
        let (width, height) = reader.decode().unwrap().dimensions();
        (format, width, height)
    }

    #[test]
    fn test_wide_image_is_clamped_on_longest_side() {
        let source = write_fixture(256, 128, ImageFormat::Png);
        let dest = NamedTempFile::new().unwrap();

        let result = generate(source.path(), dest.path(), &ThumbnailConfig::default()).unwrap();

        assert_eq!(result.format, ImageFormat::Png);
        assert_eq!((result.width, result.height), (128, 64));
        assert_eq!(read_back(dest.path()), (ImageFormat::Png, 128, 64));
    }

    #[test]
    fn test_tall_image_is_clamped_on_longest_side() {
        let source = write_fixture(100, 400, ImageFormat::Png);
        let dest = NamedTempFile::new().unwrap();

        let result = generate(source.path(), dest.path(), &ThumbnailConfig::default()).unwrap();

        assert_eq!((result.width, result.height), (32, 128));
    }

    #[test]
    fn test_small_image_is_never_upscaled() {
        let source = write_fixture(40, 30, ImageFormat::Png);
        let dest = NamedTempFile::new().unwrap();

        let result = generate(source.path(), dest.path(), &ThumbnailConfig::default()).unwrap();

        assert_eq!((result.width, result.height), (40, 30));
        assert_eq!(read_back(dest.path()), (ImageFormat::Png, 40, 30));
    }

    #[test]
    fn test_jpeg_source_stays_jpeg() {
        let source = write_fixture(300, 300, ImageFormat::Jpeg);
        let dest = NamedTempFile::new().unwrap();

        let result = generate(source.path(), dest.path(), &ThumbnailConfig::default()).unwrap();

        assert_eq!(result.format, ImageFormat::Jpeg);
        assert_eq!(result.content_type(), "image/jpeg");
        assert_eq!(read_back(dest.path()), (ImageFormat::Jpeg, 128, 128));
    }

    #[test]
    fn test_garbage_bytes_fail_to_decode() {
        let source = NamedTempFile::new().unwrap();
        std::fs::write(source.path(), b"definitely not an image").unwrap();
        let dest = NamedTempFile::new().unwrap();

        let result = generate(source.path(), dest.path(), &ThumbnailConfig::default());

        assert!(matches!(result, Err(ThumbnailError::Decode(_))));
    }

    #[test]
    fn test_truncated_png_fails_to_decode() {
        let source = write_fixture(64, 64, ImageFormat::Png);
        let bytes = std::fs::read(source.path()).unwrap();
        std::fs::write(source.path(), &bytes[..bytes.len() / 2]).unwrap();
        let dest = NamedTempFile::new().unwrap();

        let result = generate(source.path(), dest.path(), &ThumbnailConfig::default());

        assert!(matches!(result, Err(ThumbnailError::Decode(_))));
    }

    #[test]
    fn test_content_type_for_formats() {
        assert_eq!(content_type_for(ImageFormat::Png), "image/png");
        assert_eq!(content_type_for(ImageFormat::Jpeg), "image/jpeg");
    }
}
