//! 缩略图生成服务库
//!
//! 接收对象存储的上传通知，为图片生成缩略图并上传回同一个存储桶：
//! - 过滤非图片、不支持的扩展名以及已经生成的缩略图
//! - 按最大边长等比缩小，保留源图片格式
//! - 下载与上传在暂时性错误时按指数退避重试

pub mod config;
pub mod error;
pub mod handlers;
pub mod pipeline;
pub mod s3;
pub mod utils;

use axum::routing::post;
use pipeline::ThumbnailPipeline;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// 创建并配置Axum应用程序
///
/// `POST /` 接收上传事件，附带请求追踪中间件。
///
/// # 参数
///
/// * `pipeline` - 缩略图处理流水线，所有请求共享。
///
/// # Returns
///
/// 返回配置好的Axum Router实例
pub fn app(pipeline: Arc<ThumbnailPipeline>) -> axum::Router {
    axum::Router::new()
        .route("/", post(handlers::handle_event))
        .layer(TraceLayer::new_for_http())
        .layer(axum::extract::Extension(pipeline))
}
