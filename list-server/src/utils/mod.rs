//! 工具模块 - 通用工具函数
//!
//! # 内容
//!
//! - [`logger`] - 日志初始化
//! - [`validation`] - 请求参数解析与校验

pub mod logger;
pub mod validation;
