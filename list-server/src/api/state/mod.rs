//! Order state API 模块

mod handler;

use axum::{Router, routing::patch};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/state", patch(handler::reorder))
}
