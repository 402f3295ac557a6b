//! String similarity for word suggestions.
//!
//! The score is the classic sequence-matcher ratio: find the longest common
//! contiguous block of two strings, recurse on what lies to its left and
//! right, and report `2 * M / T` where `M` is the total size of all blocks
//! found and `T` is the combined length of both strings. Lengths count
//! Unicode scalar values, not bytes.
//!
//! [`ratio`] is the entry point for scoring. [`real_quick_ratio`] and
//! [`quick_ratio`] are cheap upper bounds on it, used to skip candidates that
//! cannot reach a cutoff.

mod sequence;

pub use sequence::{Match, SequenceMatcher};

/// Similarity of `a` and `b` in `[0, 1]`.
///
/// The matcher's longest-block tie-break depends on argument order, so the
/// two strings are put in lexicographic order first. This makes the score
/// symmetric: `ratio(a, b) == ratio(b, a)`.
///
/// ```
/// let score = lexis_matching::ratio("caat", "cat");
/// assert!((score - 6.0 / 7.0).abs() < 1e-12);
/// assert_eq!(score, lexis_matching::ratio("cat", "caat"));
/// ```
pub fn ratio(a: &str, b: &str) -> f64 {
    let (first, second) = if a <= b { (a, b) } else { (b, a) };
    SequenceMatcher::new(first, second).ratio()
}

/// Upper bound on [`ratio`] from the character multiset overlap.
pub fn quick_ratio(a: &str, b: &str) -> f64 {
    SequenceMatcher::new(a, b).quick_ratio()
}

/// Upper bound on [`ratio`] from the string lengths alone.
pub fn real_quick_ratio(a: &str, b: &str) -> f64 {
    let la = a.chars().count();
    let lb = b.chars().count();
    sequence::calculate_ratio(la.min(lb), la + lb)
}
