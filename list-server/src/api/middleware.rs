//! 请求日志中间件
//!
//! 每个请求进入一个 `request` span (携带 request id、方法、路由)，
//! 处理器和 `OrderStore` 在其中输出的事件 (重排、冲突、搜索重建) 都带上这个 id。
//! 请求结束时输出一行结果: 4xx/5xx 记为 WARN，其余为 INFO。

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use tower_http::request_id::RequestId;
use tracing::{Instrument, Level};

/// 从 `SetRequestIdLayer` 写入的扩展中取 request id
fn request_id(req: &Request) -> &str {
    req.extensions()
        .get::<RequestId>()
        .and_then(|id| id.header_value().to_str().ok())
        .unwrap_or("-")
}

fn outcome_level(status: StatusCode) -> Level {
    if status.is_client_error() || status.is_server_error() {
        Level::WARN
    } else {
        Level::INFO
    }
}

pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();

    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| req.uri().path().to_owned());
    let span = tracing::info_span!(
        "request",
        request_id = %request_id(&req),
        method = %req.method(),
        route = %route,
    );

    let response = next.run(req).instrument(span.clone()).await;

    let status = response.status();
    let latency_ms = start.elapsed().as_millis() as u64;
    span.in_scope(|| {
        if outcome_level(status) == Level::WARN {
            tracing::warn!(status = status.as_u16(), latency_ms, "Request failed");
        } else {
            tracing::info!(status = status.as_u16(), latency_ms, "Request completed");
        }
    });

    response
}
