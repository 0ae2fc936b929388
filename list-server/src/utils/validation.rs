//! Input parsing and validation helpers
//!
//! Request parameters arrive loosely typed; these helpers turn them into ids
//! and page numbers or produce a validation error.

use serde_json::Value;

use crate::core::AppError;

/// Parse the integer prefix of a string
///
/// Leading whitespace and one sign are accepted, then digits up to the first
/// non-digit: `"3abc"` → 3, `"  -2"` → -2, `"abc"` → `None`. Saturates on
/// overflow.
pub fn parse_int_prefix(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits: &str = &digits[..digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len())];
    if digits.is_empty() {
        return None;
    }
    let value = digits.bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    Some(if negative { -value } else { value })
}

/// Page number from a raw query value, clamped to at least 1
pub fn parse_page(raw: Option<&str>) -> usize {
    raw.and_then(parse_int_prefix)
        .and_then(|p| usize::try_from(p).ok())
        .unwrap_or(1)
        .max(1)
}

/// Read a required JSON array of positive integer ids
pub fn require_id_list(value: Option<&Value>, field: &str) -> Result<Vec<u32>, AppError> {
    let Some(value) = value else {
        return Err(AppError::validation(format!("{field} is required")));
    };
    let Some(items) = value.as_array() else {
        return Err(AppError::validation(format!("{field} must be an array")));
    };
    items
        .iter()
        .map(|v| {
            v.as_u64()
                .and_then(|n| u32::try_from(n).ok())
                .filter(|n| *n >= 1)
                .ok_or_else(|| {
                    AppError::validation(format!("{field} must contain only positive integer ids"))
                })
        })
        .collect()
}

/// Read a required JSON array of arbitrary values
pub fn require_array<'a>(value: Option<&'a Value>, field: &str) -> Result<&'a [Value], AppError> {
    value
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .ok_or_else(|| AppError::validation(format!("{field} must be an array")))
}
