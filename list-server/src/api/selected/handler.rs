//! Selection API Handlers

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use shared::request::SelectionRequest;
use shared::response::SelectionResponse;

use crate::core::{Result, ServerState};
use crate::utils::validation::require_array;

/// POST /selected - 整体替换选中集合
///
/// 非法或越界的 id 被静默丢弃，只有 `selectedIds` 不是数组时才报错。
pub async fn replace(
    State(state): State<ServerState>,
    payload: std::result::Result<Json<SelectionRequest>, JsonRejection>,
) -> Result<Json<SelectionResponse>> {
    let Json(payload) = payload?;
    let candidates = require_array(payload.selected_ids.as_ref(), "selectedIds")?;

    let selected_ids = state.with_store(|store| store.set_selection(candidates));

    Ok(Json(SelectionResponse {
        success: true,
        message: format!("Selected {} items", selected_ids.len()),
        count: selected_ids.len(),
        selected_ids,
    }))
}
