//! HTTP请求处理模块
//!
//! 对象存储的上传通知以 HTTP 推送的方式到达，此模块负责接收并交给缩略图流水线。

pub mod events;

pub use events::handle_event;
