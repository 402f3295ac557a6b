//! Turn a raw user query into a response.

use std::fmt;

use crate::config::ResolverConfig;
use crate::dictionary::Dictionary;

/// Outcome of resolving one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The lowercased query is a key.
    Found { definition: String },
    /// The query is not a key, but `word` is close enough to suggest.
    Suggested { word: String, definition: String },
    /// Neither an exact key nor a close match. `word` is the lowercased query.
    NotFound { word: String },
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolution::Found { definition } => f.write_str(definition),
            Resolution::Suggested { word, definition } => {
                write!(f, "Did you mean '{}'? Its definition is: {}", word, definition)
            }
            Resolution::NotFound { word } => write!(
                f,
                "Sorry, the word '{}' is not found in the dictionary, and no close matches were found.",
                word
            ),
        }
    }
}

/// Resolve a query against a dictionary.
///
/// The query is lowercased, looked up exactly, and on a miss matched against
/// every key with `config.cutoff` as the similarity threshold.
///
/// # Example
///
/// ```
/// use lexis_core::{resolve, Lexicon, Resolution, ResolverConfig};
///
/// let lex = Lexicon::from_entries([("cat", "a small domesticated feline")]).unwrap();
/// let config = ResolverConfig::default();
///
/// assert_eq!(
///     resolve("CAT", &lex, &config),
///     Resolution::Found { definition: "a small domesticated feline".into() }
/// );
/// assert_eq!(
///     resolve("caat", &lex, &config).to_string(),
///     "Did you mean 'cat'? Its definition is: a small domesticated feline"
/// );
/// ```
pub fn resolve<D: Dictionary + ?Sized>(query: &str, dict: &D, config: &ResolverConfig) -> Resolution {
    let word = query.to_lowercase();

    if let Some(definition) = dict.lookup_exact(&word) {
        return Resolution::Found {
            definition: definition.to_string(),
        };
    }

    let suggestion = dict
        .closest_match(&word, config.cutoff)
        .and_then(|closest| Some((closest, dict.lookup_exact(closest)?)));
    match suggestion {
        Some((closest, definition)) => Resolution::Suggested {
            word: closest.to_string(),
            definition: definition.to_string(),
        },
        None => Resolution::NotFound { word },
    }
}
