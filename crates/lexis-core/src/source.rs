//! Dictionary documents as they appear on disk.
//!
//! A document is a single key-value table mapping words to definitions:
//! a JSON object, or a TOML table for `.toml` files. A definition is either
//! a string or a list of senses, which are joined into one line.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::LexiconError;

/// Separator placed between senses when a definition is given as a list.
pub const SENSE_SEPARATOR: &str = "; ";

/// Serialization format of a dictionary document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Json,
    Toml,
}

impl SourceFormat {
    /// Pick the format from the file extension. Anything other than `.toml`
    /// is read as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => SourceFormat::Toml,
            _ => SourceFormat::Json,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawDefinition {
    Text(String),
    Senses(Vec<String>),
}

impl RawDefinition {
    /// Flatten into a single line. Blank senses are dropped.
    pub(crate) fn into_text(self) -> String {
        match self {
            RawDefinition::Text(text) => text,
            RawDefinition::Senses(senses) => senses
                .iter()
                .map(|sense| single_line(sense))
                .filter(|sense| !sense.is_empty())
                .collect::<Vec<_>>()
                .join(SENSE_SEPARATOR),
        }
    }
}

/// Join the non-blank lines of `text` with single spaces, trimming each.
pub(crate) fn single_line(text: &str) -> String {
    text.split(['\r', '\n'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse a document into its raw entries, ordered by source key.
pub(crate) fn parse_document(
    content: &str,
    format: SourceFormat,
) -> Result<BTreeMap<String, RawDefinition>, LexiconError> {
    let entries = match format {
        SourceFormat::Json => serde_json::from_str(content)?,
        SourceFormat::Toml => toml::from_str(content)?,
    };
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_extension() {
        assert_eq!(SourceFormat::from_path(Path::new("words.toml")), SourceFormat::Toml);
        assert_eq!(SourceFormat::from_path(Path::new("WORDS.TOML")), SourceFormat::Toml);
        assert_eq!(SourceFormat::from_path(Path::new("words.json")), SourceFormat::Json);
        assert_eq!(SourceFormat::from_path(Path::new("words")), SourceFormat::Json);
    }

    #[test]
    fn parse_json_strings_and_lists() {
        let doc = r#"{"cat": "a feline", "run": ["to move fast", " ", "to operate"]}"#;
        let entries = parse_document(doc, SourceFormat::Json).unwrap();
        let texts: Vec<(String, String)> = entries
            .into_iter()
            .map(|(word, def)| (word, def.into_text()))
            .collect();
        assert_eq!(
            texts,
            vec![
                ("cat".to_string(), "a feline".to_string()),
                ("run".to_string(), "to move fast; to operate".to_string()),
            ]
        );
    }

    #[test]
    fn senses_are_folded_before_joining() {
        let doc = r#"{"run": ["to move\r\nfast\n", "\n", " to operate "]}"#;
        let entries = parse_document(doc, SourceFormat::Json).unwrap();
        let text = entries.into_iter().next().unwrap().1.into_text();
        assert_eq!(text, "to move fast; to operate");
    }

    #[test]
    fn single_line_folds_every_break() {
        assert_eq!(single_line("a\nb\r\nc\rd"), "a b c d");
        assert_eq!(single_line("  plain  "), "plain");
        assert_eq!(single_line("\n \r\n"), "");
    }

    #[test]
    fn parse_toml_table() {
        let doc = "cat = \"a feline\"\ndog = [\"a canine\", \"to follow\"]\n";
        let entries = parse_document(doc, SourceFormat::Toml).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(
            entries.into_iter().map(|(_, d)| d.into_text()).collect::<Vec<_>>(),
            vec!["a feline", "a canine; to follow"]
        );
    }

    #[test]
    fn parse_rejects_non_table_documents() {
        assert!(matches!(
            parse_document(r#"["cat", "dog"]"#, SourceFormat::Json),
            Err(LexiconError::Json(_))
        ));
        assert!(matches!(
            parse_document(r#"{"cat": 3}"#, SourceFormat::Json),
            Err(LexiconError::Json(_))
        ));
        assert!(matches!(
            parse_document("cat = ", SourceFormat::Toml),
            Err(LexiconError::Toml(_))
        ));
    }
}
