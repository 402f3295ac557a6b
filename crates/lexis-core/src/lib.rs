//! Word lexicon with exact and closest-match lookup.
//!
//! A [`Lexicon`] is loaded once from a dictionary file and never changes.
//! [`resolve`] answers a user query against any [`Dictionary`]: the
//! definition on an exact hit, otherwise a suggestion for the most similar
//! word, otherwise a not-found message.

mod config;
pub mod dictionary;
mod error;
pub mod lexicon;
pub mod resolver;
pub mod source;

pub use config::{DEFAULT_CUTOFF, ResolverConfig};
pub use dictionary::Dictionary;
pub use error::LexiconError;
pub use lexicon::Lexicon;
pub use resolver::{Resolution, resolve};
pub use source::SourceFormat;
