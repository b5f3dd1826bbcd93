//! S3配置模块
//!
//! 该模块负责S3客户端的配置和初始化。

use aws_config::retry::RetryConfig;
use aws_sdk_s3::Client;
use std::env;
use std::sync::Arc;

/// 启用 path-style 访问的环境变量名（MinIO 等 S3 兼容存储需要）
pub const FORCE_PATH_STYLE_VAR: &str = "S3_FORCE_PATH_STYLE";

/// 创建 S3 客户端。
///
/// 使用官方标准方式从环境变量中自动读取 AWS 配置信息。
///
/// # 标准 AWS 环境变量
///
/// * `AWS_ACCESS_KEY_ID` - AWS 访问密钥 ID
/// * `AWS_SECRET_ACCESS_KEY` - AWS 秘密访问密钥
/// * `AWS_REGION` - AWS 区域
/// * `AWS_ENDPOINT_URL` - S3 兼容服务的端点 URL
///
/// SDK 自带的重试被关闭，重试统一由存储网关的退避策略处理。
pub async fn create_s3_client() -> Arc<Client> {
    let shared_config = aws_config::load_from_env().await;

    let s3_config = aws_sdk_s3::config::Builder::from(&shared_config)
        .retry_config(RetryConfig::disabled())
        .force_path_style(force_path_style())
        .build();

    Arc::new(Client::from_conf(s3_config))
}

fn force_path_style() -> bool {
    env::var(FORCE_PATH_STYLE_VAR)
        .map(|value| matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true"))
        .unwrap_or(false)
}
