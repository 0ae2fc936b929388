//! API 路由模块
//!
//! # 路由列表
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | / | GET | 存活文本 |
//! | /health | GET | 健康检查 |
//! | /items | GET | 分页 / 搜索查询 |
//! | /state | PATCH | 乐观并发重排 |
//! | /selected | POST | 替换选中集合 |
//! | /reset | POST | 恢复初始状态 |

pub mod health;
pub mod items;
pub mod middleware;
pub mod reset;
pub mod selected;
pub mod state;

use axum::Router;
use axum::middleware as axum_middleware;
use http::{HeaderName, HeaderValue};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use uuid::Uuid;

use crate::core::ServerState;

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        // Health API
        .merge(health::router())
        // Domain API
        .merge(items::router())
        .merge(state::router())
        .merge(selected::router())
        .merge(reset::router())
}

/// Build the fully configured application with all middleware and state
///
/// Used by the HTTP server and by in-process tests.
pub fn build_app(state: ServerState) -> Router {
    build_router()
        .with_state(state)
        // ========== Tower HTTP Middleware ==========
        // CORS - Handle cross-origin requests
        .layer(CorsLayer::permissive())
        // Compression - Gzip compress responses
        .layer(CompressionLayer::new())
        // Request logging (reads the id set by SetRequestIdLayer)
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        // Propagate request ID to response
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            "x-request-id",
        )))
        // Request ID - outermost, generated before logging sees the request
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static("x-request-id"),
            XRequestId,
        ))
}
