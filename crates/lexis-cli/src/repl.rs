//! Interactive prompt loop.

use std::io::{self, BufRead, Write};

use lexis_core::{Dictionary, ResolverConfig, resolve};

use crate::output::{self, ColorMode};

pub const PROMPT: &str = "Enter a word (or 'q' to quit): ";

/// Prompt for words until the user enters `q` or input ends.
///
/// Each entry is resolved and answered with exactly one line.
pub fn run<R, W, D>(
    mut input: R,
    out: &mut W,
    dict: &D,
    config: &ResolverConfig,
    color: ColorMode,
) -> io::Result<()>
where
    R: BufRead,
    W: Write + ?Sized,
    D: Dictionary + ?Sized,
{
    let mut buf = Vec::new();
    let mut queries = 0usize;

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            // EOF: end the dangling prompt line
            writeln!(out)?;
            break;
        }
        // Invalid UTF-8 still gets an answer rather than ending the session.
        let line = String::from_utf8_lossy(&buf);
        let entry = line.trim_end_matches(['\n', '\r']);
        if is_quit(entry) {
            break;
        }

        let resolution = resolve(entry, dict, config);
        output::print_resolution(out, &resolution, color)?;
        queries += 1;
    }

    tracing::debug!(queries, "prompt closed");
    Ok(())
}

fn is_quit(entry: &str) -> bool {
    entry.trim().eq_ignore_ascii_case("q")
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use lexis_core::Lexicon;

    use super::*;

    fn session(input: &str) -> String {
        let lex = Lexicon::from_entries([
            ("cat", "a small domesticated feline"),
            ("dog", "a domesticated canine"),
        ])
        .unwrap();
        let mut out = Vec::new();
        run(
            Cursor::new(input),
            &mut out,
            &lex,
            &ResolverConfig::default(),
            ColorMode(false),
        )
        .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn answers_each_entry_then_quits() {
        let out = session("cat\nCaat\nxyz123\nq\nlost\n");
        let expected = format!(
            "{p}a small domesticated feline\n\
             {p}Did you mean 'cat'? Its definition is: a small domesticated feline\n\
             {p}Sorry, the word 'xyz123' is not found in the dictionary, and no close matches were found.\n\
             {p}",
            p = PROMPT
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn quit_is_case_insensitive() {
        assert_eq!(session("Q\n"), PROMPT);
        assert_eq!(session("  q  \r\n"), PROMPT);
    }

    #[test]
    fn end_of_input_closes_prompt() {
        assert_eq!(session(""), format!("{}\n", PROMPT));
        assert_eq!(
            session("dog"),
            format!("{p}a domesticated canine\n{p}\n", p = PROMPT)
        );
    }

    #[test]
    fn quit_word_is_not_a_prefix_match() {
        let out = session("quit\nq\n");
        assert!(out.contains("Sorry, the word 'quit'"));
    }

    #[test]
    fn invalid_utf8_line_is_answered_and_session_continues() {
        let lex = Lexicon::from_entries([("cat", "a small domesticated feline")]).unwrap();
        let mut out = Vec::new();
        run(
            Cursor::new(&b"caf\xe9\ncat\nq\n"[..]),
            &mut out,
            &lex,
            &ResolverConfig::default(),
            ColorMode(false),
        )
        .unwrap();
        let out = String::from_utf8(out).unwrap();
        let expected = format!(
            "{p}Sorry, the word 'caf\u{FFFD}' is not found in the dictionary, and no close matches were found.\n\
             {p}a small domesticated feline\n\
             {p}",
            p = PROMPT
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn is_quit_variants() {
        assert!(is_quit("q"));
        assert!(is_quit("Q"));
        assert!(!is_quit("qq"));
        assert!(!is_quit(""));
    }
}
