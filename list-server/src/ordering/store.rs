//! OrderStore - the single mutable ordering state
//!
//! Holds the working order (a permutation of the universe, or of the
//! filtered subset while a search is active), the active search term, the
//! selection set and the item cache.
//!
//! # Search state machine
//!
//! ```text
//! query(search)
//!     ├─ search param present and != stored term
//!     │     └─ working order := 1..=N, stored term := param ("" clears it)
//!     ├─ search param absent → stored term keeps applying
//!     └─ stored term non-empty
//!           └─ working order := working order filtered by term (in place)
//! ```
//!
//! Filtering replaces the working order. Reorders made under a term survive
//! repeated queries with that same term and are discarded once the term
//! changes.

use std::fmt::Write;

use serde_json::Value;
use shared::models::Item;
use shared::response::{ItemsResponse, UpdatedRange};

use super::error::{OrderingError, OrderingResult};
use super::matcher::find_subsequence;
use super::selection;
use crate::catalog::ItemFactory;

#[derive(Debug)]
pub struct OrderStore {
    total_items: u32,
    order: Vec<u32>,
    search: Option<String>,
    selected: Vec<u32>,
    items: ItemFactory,
}

impl OrderStore {
    /// Fresh state: identity order, no search, empty selection, empty cache
    pub fn new(total_items: u32, seed: u32) -> Self {
        Self {
            total_items,
            order: identity(total_items),
            search: None,
            selected: Vec::new(),
            items: ItemFactory::new(seed, total_items),
        }
    }

    // ========== Query ==========

    /// Serve one page of the working order
    ///
    /// `search` is `None` when the request carried no search parameter.
    /// `page` is 1-based; values below 1 read as 1.
    pub fn query(
        &mut self,
        page: usize,
        page_size: usize,
        search: Option<&str>,
    ) -> OrderingResult<ItemsResponse> {
        let page = page.max(1);

        if let Some(term) = search {
            let term = Some(term).filter(|t| !t.is_empty()).map(str::to_owned);
            if term != self.search {
                tracing::info!(
                    previous = ?self.search,
                    search = ?term,
                    "Search term changed, working order rebuilt"
                );
                self.order = identity(self.total_items);
                self.search = term;
            }
        }

        if let Some(term) = &self.search {
            let before = self.order.len();
            filter_by_digits(&mut self.order, &term.to_lowercase());
            tracing::debug!(search = %term, before, after = self.order.len(), "Working order filtered");
        }

        let total = self.order.len();
        let offset = (page - 1).saturating_mul(page_size);
        let end = offset.saturating_add(page_size);
        let window = &self.order[offset.min(total)..end.min(total)];
        let items = self.items.get_many(window)?;

        Ok(ItemsResponse {
            items,
            total,
            page,
            page_size,
            has_more: total > end,
            search: self.search.clone(),
            selected: self.selected.clone(),
        })
    }

    // ========== Mutation ==========

    /// Replace the first run equal to `expected` with `replacement`
    ///
    /// `replacement` must be a permutation of `expected`, so the order keeps
    /// every id exactly once. Returns the inclusive index range written.
    pub fn apply_reorder(
        &mut self,
        expected: &[u32],
        replacement: &[u32],
    ) -> OrderingResult<UpdatedRange> {
        if expected.is_empty() || replacement.is_empty() {
            return Err(OrderingError::Validation(
                "oldPageOrder and newPageOrder must not be empty".to_string(),
            ));
        }
        if expected.len() != replacement.len() {
            return Err(OrderingError::Validation(format!(
                "oldPageOrder has {} ids but newPageOrder has {}",
                expected.len(),
                replacement.len()
            )));
        }
        if !is_permutation(expected, replacement) {
            return Err(OrderingError::Validation(
                "newPageOrder must contain exactly the ids of oldPageOrder".to_string(),
            ));
        }

        let Some(start) = find_subsequence(&self.order, expected) else {
            tracing::warn!(
                expected_len = expected.len(),
                order_len = self.order.len(),
                "Reorder rejected: expected range not found"
            );
            return Err(OrderingError::Conflict {
                expected: expected.to_vec(),
                current: self.order.clone(),
            });
        };

        let end = start + replacement.len();
        self.order[start..end].copy_from_slice(replacement);
        tracing::info!(start, end = end - 1, "Reorder applied");

        Ok(UpdatedRange {
            start,
            end: end - 1,
        })
    }

    /// Replace the selection set wholesale, returns the ids kept
    pub fn set_selection(&mut self, candidates: &[Value]) -> Vec<u32> {
        self.selected = selection::valid_ids(candidates, self.total_items);
        tracing::info!(
            received = candidates.len(),
            kept = self.selected.len(),
            "Selection replaced"
        );
        self.selected.clone()
    }

    /// Back to the startup state
    pub fn reset(&mut self) {
        self.order = identity(self.total_items);
        self.search = None;
        self.selected.clear();
        self.items.clear();
        tracing::info!(total_items = self.total_items, "State reset");
    }

    // ========== Accessors ==========

    pub fn order(&self) -> &[u32] {
        &self.order
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    pub fn selected(&self) -> &[u32] {
        &self.selected
    }

    pub fn seed(&self) -> u32 {
        self.items.seed()
    }

    pub fn cached_items(&self) -> usize {
        self.items.cached_len()
    }

    pub fn item(&mut self, id: u32) -> OrderingResult<Item> {
        Ok(self.items.get(id)?.clone())
    }
}

fn identity(total_items: u32) -> Vec<u32> {
    (1..=total_items).collect()
}

/// Keep ids whose decimal form contains `needle`
fn filter_by_digits(order: &mut Vec<u32>, needle: &str) {
    let mut buf = String::with_capacity(10);
    order.retain(|id| {
        buf.clear();
        write!(buf, "{}", id).is_ok() && buf.contains(needle)
    });
}

fn is_permutation(a: &[u32], b: &[u32]) -> bool {
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort_unstable();
    b.sort_unstable();
    a == b
}
