//! List Server - 可排序、可搜索的内存列表服务
//!
//! # 架构概述
//!
//! 进程内持有 1..=N 的一个排列 (工作顺序)，提供分页 / 搜索查询，
//! 以及按内容锚定、带冲突检测的区间重排。状态只在进程生命周期内存在。
//!
//! # 模块结构
//!
//! ```text
//! list-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── catalog/       # 条目生成与缓存
//! ├── ordering/      # 工作顺序、匹配、选中集合
//! ├── api/           # HTTP 路由和处理器
//! └── utils/         # 日志、参数解析
//! ```

pub mod api;
pub mod catalog;
pub mod core;
pub mod ordering;
pub mod utils;

// Re-export 公共类型
pub use api::build_app;
pub use catalog::{CatalogError, ItemFactory};
pub use crate::core::{AppError, Config, Server, ServerState};
pub use ordering::{OrderStore, OrderingError};

// Re-export logger functions
pub use utils::logger::init_logger;

/// 设置运行环境: 加载 .env，初始化日志
pub fn setup_environment() -> Config {
    // .env 是可选的
    let _ = dotenv::dotenv();
    let config = Config::from_env();
    init_logger(&config.log_level, config.log_dir.as_deref());
    config
}

pub fn print_banner() {
    println!(
        r#"
    __    _      __
   / /   (_)____/ /_
  / /   / / ___/ __/
 / /___/ (__  ) /_
/_____/_/____/\__/
    "#
    );
}
