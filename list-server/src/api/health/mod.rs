//! 健康检查路由
//!
//! # 路由列表
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | / | GET | 存活文本 |
//! | /health | GET | 健康检查 |
//!
//! # 响应示例
//!
//! ```json
//! {
//!   "status": "ok",
//!   "version": "0.1.0",
//!   "totalItems": 1000000,
//!   "pageSize": 20,
//!   "seed": 23,
//!   "uptimeSeconds": 42
//! }
//! ```

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
}

/// 健康检查响应
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    total_items: u32,
    page_size: usize,
    /// 条目分类使用的进程种子
    seed: u32,
    uptime_seconds: u64,
}

async fn root() -> &'static str {
    "Hello World!"
}

/// GET /health
async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        total_items: state.config.total_items,
        page_size: state.config.page_size,
        seed: state.with_store(|store| store.seed()),
        uptime_seconds: state.uptime_seconds(),
    })
}
