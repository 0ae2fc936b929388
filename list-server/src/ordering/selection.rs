//! Selection input coercion
//!
//! Clients send arbitrary JSON values; anything that does not read as an id
//! inside the universe is dropped silently.

use std::collections::HashSet;

use serde_json::Value;

use crate::utils::validation::parse_int_prefix;

/// Coerce one JSON value into an id in `1..=total`
///
/// Numbers are truncated toward zero, strings are read by their integer
/// prefix (`"12abc"` reads as 12). Everything else is rejected.
pub fn coerce_id(value: &Value, total: u32) -> Option<u32> {
    let n = match value {
        Value::Number(n) => match (n.as_i64(), n.as_u64(), n.as_f64()) {
            (Some(i), _, _) => i,
            (None, Some(u), _) => i64::try_from(u).ok()?,
            (None, None, Some(f)) if f.is_finite() => f.trunc() as i64,
            _ => return None,
        },
        Value::String(s) => parse_int_prefix(s)?,
        _ => return None,
    };
    u32::try_from(n).ok().filter(|id| (1..=total).contains(id))
}

/// Valid, deduplicated ids in first-seen order
pub fn valid_ids(values: &[Value], total: u32) -> Vec<u32> {
    let mut seen = HashSet::with_capacity(values.len());
    values
        .iter()
        .filter_map(|v| coerce_id(v, total))
        .filter(|id| seen.insert(*id))
        .collect()
}
