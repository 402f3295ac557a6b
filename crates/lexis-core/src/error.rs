use std::path::PathBuf;

/// Errors raised while building a lexicon or its lookup configuration.
///
/// Lookups themselves never fail; a missing word is an ordinary result.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON dictionary: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed TOML dictionary: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("dictionary entry has an empty word")]
    EmptyWord,

    #[error("dictionary entry '{0}' has an empty definition")]
    EmptyDefinition(String),

    #[error("dictionary contains no entries")]
    Empty,

    #[error("cutoff must be between 0 and 1, got {0}")]
    InvalidCutoff(f64),
}
