//! In-memory word→definition lexicon.
//!
//! # Loading
//!
//! - **File**: [`Lexicon::from_file`] picks JSON or TOML by extension
//! - **String**: [`Lexicon::parse`] with an explicit [`SourceFormat`]
//! - **Pairs**: [`Lexicon::from_entries`] for already-decoded data
//!
//! Every constructor lowercases words and rejects empty words, empty
//! definitions and empty documents. Once built, a lexicon is never mutated.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::path::Path;

use crate::dictionary::Dictionary;
use crate::source::{self, SourceFormat};
use crate::LexiconError;

/// Word→definition mapping with lowercase, non-empty keys.
///
/// Keys are kept sorted so closest-match scans visit them in a fixed order.
#[derive(Debug, Clone)]
pub struct Lexicon {
    entries: BTreeMap<String, String>,
}

impl Lexicon {
    /// Load a lexicon from a dictionary file.
    pub fn from_file(path: &Path) -> Result<Self, LexiconError> {
        let content = std::fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, SourceFormat::from_path(path))
    }

    /// Load a lexicon from document text.
    pub fn parse(content: &str, format: SourceFormat) -> Result<Self, LexiconError> {
        let raw = source::parse_document(content, format)?;
        Self::from_entries(raw.into_iter().map(|(word, def)| (word, def.into_text())))
    }

    /// Build a lexicon from `(word, definition)` pairs.
    ///
    /// Line breaks inside a definition are folded into single spaces.
    ///
    /// When two words fold to the same lowercase key, a word that is already
    /// lowercase wins; otherwise the first pair wins.
    pub fn from_entries<I, K, V>(entries: I) -> Result<Self, LexiconError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        // key -> (definition, source word was already lowercase)
        let mut map: BTreeMap<String, (String, bool)> = BTreeMap::new();
        for (word, definition) in entries {
            let word = word.as_ref();
            if word.is_empty() {
                return Err(LexiconError::EmptyWord);
            }
            let definition = source::single_line(&definition.into());
            if definition.is_empty() {
                return Err(LexiconError::EmptyDefinition(word.to_string()));
            }
            let key = word.to_lowercase();
            let is_lowercase = key == word;
            match map.entry(key) {
                Entry::Vacant(slot) => {
                    slot.insert((definition, is_lowercase));
                }
                Entry::Occupied(mut slot) => {
                    if is_lowercase && !slot.get().1 {
                        tracing::warn!(
                            word,
                            "duplicate word after case folding, preferring the lowercase entry"
                        );
                        slot.insert((definition, true));
                    } else {
                        tracing::warn!(
                            word,
                            key = %slot.key(),
                            "duplicate word after case folding, keeping the earlier definition"
                        );
                    }
                }
            }
        }

        if map.is_empty() {
            return Err(LexiconError::Empty);
        }
        tracing::debug!(words = map.len(), "lexicon built");
        let entries = map
            .into_iter()
            .map(|(key, (definition, _))| (key, definition))
            .collect();
        Ok(Self { entries })
    }

    /// Definition of an already-lowercased word.
    pub fn lookup_exact(&self, word: &str) -> Option<&str> {
        self.entries.get(word).map(String::as_str)
    }

    /// Key with the highest similarity ratio to `word`, if that ratio is at
    /// least `cutoff`.
    ///
    /// Ties go to the lexicographically greatest key. Candidates whose cheap
    /// upper bounds already fall below `cutoff` are skipped without computing
    /// the full ratio.
    pub fn closest_match(&self, word: &str, cutoff: f64) -> Option<&str> {
        let mut best: Option<(f64, &str)> = None;

        for key in self.entries.keys() {
            if lexis_matching::real_quick_ratio(word, key) < cutoff
                || lexis_matching::quick_ratio(word, key) < cutoff
            {
                continue;
            }
            let score = lexis_matching::ratio(word, key);
            if score < cutoff {
                continue;
            }
            // Keys ascend, so `>=` hands ties to the later key.
            if best.is_none_or(|(top, _)| score >= top) {
                best = Some((score, key.as_str()));
            }
        }

        match best {
            Some((score, key)) => {
                tracing::debug!(query = word, suggestion = key, score, "closest match");
                Some(key)
            }
            None => {
                tracing::debug!(query = word, cutoff, "no candidate reached the cutoff");
                None
            }
        }
    }

    /// All words, in ascending order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false` for a constructed lexicon.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Dictionary for Lexicon {
    fn lookup_exact(&self, word: &str) -> Option<&str> {
        Lexicon::lookup_exact(self, word)
    }

    fn closest_match(&self, word: &str, cutoff: f64) -> Option<&str> {
        Lexicon::closest_match(self, word, cutoff)
    }
}
