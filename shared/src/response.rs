//! API Response types
//!
//! Response bodies of the list service, one struct per endpoint outcome.

use serde::{Deserialize, Serialize};

use crate::models::Item;

/// `GET /items` response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemsResponse {
    pub items: Vec<Item>,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
    pub has_more: bool,
    /// Effective search term, omitted when no search is active
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    pub selected: Vec<u32>,
}

/// Inclusive index range touched by a reorder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatedRange {
    pub start: usize,
    pub end: usize,
}

/// `PATCH /state` success response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderResponse {
    pub success: bool,
    pub message: String,
    pub updated_range: UpdatedRange,
}

/// `POST /selected` response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionResponse {
    pub success: bool,
    pub message: String,
    pub count: usize,
    pub selected_ids: Vec<u32>,
}

/// `POST /reset` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetResponse {
    pub success: bool,
    pub message: String,
}

/// 409 body: the expected run was not found in the current order
///
/// Carries the full working order so the client can resync.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflictBody {
    pub error: String,
    pub current_state: Vec<u32>,
    pub received: Vec<u32>,
}

/// Generic error body (`{"error": "..."}`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
