//! 工具函数模块
//!
//! - 对象键处理工具（扩展名拆分）
//! - 指数退避重试策略

pub mod path;
pub mod retry;
