use std::sync::Arc;
use thumbnail_generator::config::{ServerConfig, ThumbnailConfig};
use thumbnail_generator::pipeline::ThumbnailPipeline;
use thumbnail_generator::s3::{S3Backend, StorageGateway, create_s3_client};
use thumbnail_generator::utils::retry::RetryPolicy;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载 .env 文件
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_timer(tracing_subscriber::fmt::time::LocalTime::rfc_3339())
        .init();

    let thumbnail_config = Arc::new(ThumbnailConfig::from_env()?);
    let server_config = ServerConfig::from_env()?;

    let s3_client = create_s3_client().await;
    let gateway = StorageGateway::new(
        Arc::new(S3Backend::new(s3_client)),
        RetryPolicy::default(),
    );
    let pipeline = Arc::new(ThumbnailPipeline::new(thumbnail_config.clone(), gateway));

    let addr = server_config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        %addr,
        max_dimension = thumbnail_config.max_dimension,
        suffix = %thumbnail_config.suffix,
        "缩略图服务已启动"
    );

    axum::serve(listener, thumbnail_generator::app(pipeline)).await?;
    Ok(())
}
