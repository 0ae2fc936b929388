//! 日志初始化
//!
//! 服务输出的日志:
//! - 启动: 端口、条目总数、页大小、种子
//! - 每个请求: `request` span (request id、方法、路由) 和一行结果 (状态码、耗时)
//! - 排序状态变化: 搜索重建、重排成功、重排冲突、选中集合替换、reset
//!
//! 默认写 stdout；`LOG_DIR` 指向已存在的目录时改写按天滚动的 `list-server.YYYY-MM-DD` 文件。

use std::path::Path;

use tracing::Level;

/// 安装全局 fmt subscriber
///
/// 可重复调用，已安装时后续调用不生效 (测试里多次初始化也安全)。
pub fn init_logger(log_level: &str, log_dir: Option<&str>) {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(parse_level(log_level))
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    match log_dir.map(Path::new).filter(|dir| dir.is_dir()) {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, "list-server");
            let _ = subscriber.with_ansi(false).with_writer(file_appender).try_init();
        }
        None => {
            let _ = subscriber.try_init();
        }
    }
}

/// `LOG_LEVEL` 无法识别时退回 INFO
fn parse_level(log_level: &str) -> Level {
    log_level.parse().unwrap_or(Level::INFO)
}
