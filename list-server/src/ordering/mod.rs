//! 排序状态 - 工作顺序、搜索过滤、选中集合
//!
//! # 模块结构
//!
//! - [`OrderStore`] - 唯一的可变状态 (查询 / 重排 / 选中 / 重置)
//! - [`matcher`] - 重排锚点匹配
//! - [`selection`] - 选中 id 的宽松解析
//! - [`OrderingError`] - 领域错误

mod error;
pub mod matcher;
pub mod selection;
mod store;

pub use error::{OrderingError, OrderingResult};
pub use store::OrderStore;
