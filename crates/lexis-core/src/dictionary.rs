//! Dictionary trait for definition lookup.
//!
//! This module defines the [`Dictionary`] trait that query resolution runs
//! against. [`Lexicon`](crate::Lexicon) is the in-memory implementation.

/// Trait for word→definition dictionaries.
///
/// Implementations can back this with an in-memory map, an on-disk index,
/// or anything else that can answer both queries without mutation.
pub trait Dictionary: Send + Sync {
    /// Return the definition of `word`, if it is a key.
    ///
    /// The caller lowercases `word` first; implementations store lowercase
    /// keys and do not fold case again.
    fn lookup_exact(&self, word: &str) -> Option<&str>;

    /// Return the key most similar to `word`, if its similarity ratio is at
    /// least `cutoff`.
    fn closest_match(&self, word: &str, cutoff: f64) -> Option<&str>;
}
