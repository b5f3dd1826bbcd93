//! S3模块
//!
//! 该模块负责处理与对象存储的交互，包括客户端配置、单次读写和带重试的存储网关。

pub mod backend;
pub mod config;
pub mod gateway;

pub use backend::{S3Backend, StorageBackend};
pub use config::create_s3_client;
pub use gateway::StorageGateway;
