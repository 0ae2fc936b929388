//! Reset API
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /reset | POST | 恢复初始顺序，清空搜索、选中和缓存 |

use axum::{Json, Router, extract::State, routing::post};
use shared::response::ResetResponse;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/reset", post(reset))
}

/// POST /reset
async fn reset(State(state): State<ServerState>) -> Json<ResetResponse> {
    state.with_store(|store| store.reset());
    Json(ResetResponse {
        success: true,
        message: "State reset to initial order".to_string(),
    })
}
