//! Subsequence matching
//!
//! Finds the anchor of a reorder: the first contiguous run of the working
//! order equal to the client's expected run.

/// Index of the first contiguous run of `haystack` equal to `needle`
///
/// Naive scan, O(haystack × needle). An empty needle never matches.
pub fn find_subsequence(haystack: &[u32], needle: &[u32]) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
