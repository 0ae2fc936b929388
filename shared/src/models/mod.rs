//! Data models
//!
//! Shared between list-server and frontend (via API).
//! Item ids are `u32`, the universe is `1..=N`.

pub mod item;

// Re-exports
pub use item::*;
