//! Shared types for the list service
//!
//! Wire types used by the HTTP surface: the item model plus request and
//! response bodies. Field names follow the JSON contract (camelCase).

pub mod models;
pub mod request;
pub mod response;

// Re-exports
pub use models::Item;
pub use request::{ItemsQuery, ReorderRequest, SelectionRequest};
pub use response::{
    ConflictBody, ErrorBody, ItemsResponse, ReorderResponse, ResetResponse, SelectionResponse,
    UpdatedRange,
};
pub use serde::{Deserialize, Serialize};
