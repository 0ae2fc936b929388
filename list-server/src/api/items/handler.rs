//! Items API Handlers

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use shared::request::ItemsQuery;
use shared::response::ItemsResponse;

use crate::core::{Result, ServerState};
use crate::utils::validation::parse_page;

/// GET /items?page=&search= - 分页查询工作顺序
///
/// 带 `search` 参数时可能重建并过滤工作顺序 (见 `OrderStore::query`)。
pub async fn list(
    State(state): State<ServerState>,
    query: std::result::Result<Query<ItemsQuery>, QueryRejection>,
) -> Result<Json<ItemsResponse>> {
    let Query(query) = query?;
    let page = parse_page(query.page.as_deref());
    let page_size = state.config.page_size;

    let resp = state
        .with_store_blocking(move |store| store.query(page, page_size, query.search.as_deref()))
        .await??;
    Ok(Json(resp))
}
