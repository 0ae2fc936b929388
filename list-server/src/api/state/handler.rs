//! Order state API Handlers

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use shared::request::ReorderRequest;
use shared::response::ReorderResponse;

use crate::core::{Result, ServerState};
use crate::utils::validation::require_id_list;

/// PATCH /state - 按内容锚定的乐观重排
///
/// 客户端提交它看到的连续区间 (`oldPageOrder`) 和新的排列 (`newPageOrder`)。
/// 区间在当前工作顺序中找不到时返回 409 和当前顺序，状态不变。
pub async fn reorder(
    State(state): State<ServerState>,
    payload: std::result::Result<Json<ReorderRequest>, JsonRejection>,
) -> Result<Json<ReorderResponse>> {
    let Json(payload) = payload?;
    let expected = require_id_list(payload.old_page_order.as_ref(), "oldPageOrder")?;
    let replacement = require_id_list(payload.new_page_order.as_ref(), "newPageOrder")?;

    let moved = replacement.len();
    let range = state
        .with_store_blocking(move |store| store.apply_reorder(&expected, &replacement))
        .await??;

    Ok(Json(ReorderResponse {
        success: true,
        message: format!("Order updated for {} items", moved),
        updated_range: range,
    }))
}
