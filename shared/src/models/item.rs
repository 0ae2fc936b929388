//! Item Model

use serde::{Deserialize, Serialize};

/// Item entity
///
/// Fully derived from its id and the process seed, never edited.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub name: String,
    pub category: String,
}
