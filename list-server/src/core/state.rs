use std::sync::Arc;
use std::time::Instant;

use parking_lot::Mutex;

use crate::core::{AppError, Config, Result};
use crate::ordering::OrderStore;

/// 服务器状态 - 持有配置和唯一的排序状态
///
/// ServerState 使用 Arc 实现浅拷贝，每个请求处理器拿到同一份状态。
///
/// # 字段
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | store | Arc<Mutex<OrderStore>> | 工作顺序、搜索、选中集合、条目缓存 |
/// | started_at | Instant | 启动时间 (健康检查) |
///
/// 所有读写都在同一把锁内完成整个操作，两个针对同一区间的重排请求不会同时成功。
///
/// # 使用示例
///
/// ```ignore
/// let state = ServerState::initialize(&config);
/// let page = state.with_store(|store| store.query(1, 20, None))?;
/// ```
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 排序状态 (单一互斥门)
    pub store: Arc<Mutex<OrderStore>>,
    /// 启动时间
    pub started_at: Instant,
}

impl ServerState {
    /// 创建服务器状态 (手动构造)
    pub fn new(config: Config, store: OrderStore) -> Self {
        Self {
            config,
            store: Arc::new(Mutex::new(store)),
            started_at: Instant::now(),
        }
    }

    /// 按配置初始化: 单位排列 1..=N，空搜索，空选中
    pub fn initialize(config: &Config) -> Self {
        tracing::info!(
            total_items = config.total_items,
            page_size = config.page_size,
            seed = config.seed,
            "Initializing order store"
        );
        let store = OrderStore::new(config.total_items, config.seed);
        Self::new(config.clone(), store)
    }

    /// 在锁内执行一次完整操作
    pub fn with_store<T>(&self, f: impl FnOnce(&mut OrderStore) -> T) -> T {
        let mut store = self.store.lock();
        f(&mut store)
    }

    /// 同 `with_store`，但在 blocking 线程池里执行
    ///
    /// 搜索重建、过滤和冲突时复制整个工作顺序都是 O(N)，不占用 tokio worker。
    /// 当前 span 随任务带过去，store 的日志仍然挂在请求上。
    pub async fn with_store_blocking<T, F>(&self, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut OrderStore) -> T + Send + 'static,
    {
        let store = Arc::clone(&self.store);
        let span = tracing::Span::current();
        tokio::task::spawn_blocking(move || {
            let _entered = span.enter();
            let mut store = store.lock();
            f(&mut store)
        })
        .await
        .map_err(|e| AppError::internal(format!("Store task failed: {}", e)))
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
