use rand::Rng;

/// 默认条目总数 (N)
pub const DEFAULT_TOTAL_ITEMS: u32 = 1_000_000;
/// 默认分页大小
pub const DEFAULT_PAGE_SIZE: usize = 20;
/// 分类种子范围 (含两端)
pub const SEED_MIN: u32 = 10;
pub const SEED_MAX: u32 = 50;

/// 服务器配置 - 列表服务的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT | 8000 | HTTP 服务端口 |
/// | TOTAL_ITEMS | 1000000 | 条目总数 N |
/// | PAGE_SIZE | 20 | 分页大小 |
/// | ITEM_SEED | 随机 10..=50 | 分类生成种子 |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (无) | 日志目录 (存在时写入滚动文件) |
/// | SHUTDOWN_TIMEOUT_MS | 10000 | 关闭超时(毫秒) |
///
/// # 示例
///
/// ```ignore
/// TOTAL_ITEMS=5000 ITEM_SEED=17 HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 条目总数，合法 id 为 `1..=total_items`
    pub total_items: u32,
    /// 每页条目数
    pub page_size: usize,
    /// 分类种子，进程启动时确定一次
    pub seed: u32,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 日志级别
    pub log_level: String,
    /// 日志目录
    pub log_dir: Option<String>,
    /// 关闭超时时间 (毫秒)
    pub shutdown_timeout_ms: u64,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置或无法解析，使用默认值
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            total_items: std::env::var("TOTAL_ITEMS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|n| *n >= 1)
                .unwrap_or(DEFAULT_TOTAL_ITEMS),
            page_size: std::env::var("PAGE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|n| *n >= 1)
                .unwrap_or(DEFAULT_PAGE_SIZE),
            seed: std::env::var("ITEM_SEED")
                .ok()
                .and_then(|v| v.parse::<u32>().ok())
                .map(clamp_seed)
                .unwrap_or_else(random_seed),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            shutdown_timeout_ms: std::env::var("SHUTDOWN_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(10000),
        }
    }

    /// 使用自定义值覆盖领域配置
    ///
    /// 常用于测试场景，不读取种子相关的环境变量
    pub fn with_overrides(total_items: u32, page_size: usize, seed: u32) -> Self {
        let mut config = Self::from_env();
        config.total_items = total_items.max(1);
        config.page_size = page_size.max(1);
        config.seed = clamp_seed(seed);
        config
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Draw the per-process seed from `[SEED_MIN, SEED_MAX]`
pub fn random_seed() -> u32 {
    rand::thread_rng().gen_range(SEED_MIN..=SEED_MAX)
}

fn clamp_seed(seed: u32) -> u32 {
    seed.clamp(SEED_MIN, SEED_MAX)
}
