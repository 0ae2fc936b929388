//! Request types for the shared crate
//!
//! Bodies are kept loosely typed (`serde_json::Value`) where the server has to
//! tell "wrong shape" apart from "missing" and answer both with its own error
//! body instead of the framework's rejection.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `GET /items` query parameters
///
/// `page` stays a raw string: non-numeric input falls back to page 1 and
/// `3abc` reads as 3.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemsQuery {
    pub page: Option<String>,
    pub search: Option<String>,
}

/// `PATCH /state` body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderRequest {
    /// The contiguous run the client last saw
    #[serde(default)]
    pub old_page_order: Option<Value>,
    /// The same ids in their new order
    #[serde(default)]
    pub new_page_order: Option<Value>,
}

/// `POST /selected` body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionRequest {
    #[serde(default)]
    pub selected_ids: Option<Value>,
}

impl ReorderRequest {
    /// Build a well-formed request from two id lists (client helper)
    pub fn new(old_page_order: &[u32], new_page_order: &[u32]) -> Self {
        Self {
            old_page_order: Some(Value::from(old_page_order.to_vec())),
            new_page_order: Some(Value::from(new_page_order.to_vec())),
        }
    }
}
