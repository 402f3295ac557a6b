use std::io::{self, Write};

use lexis_core::Resolution;
use owo_colors::OwoColorize;

/// Whether responses are written with ANSI colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorMode(pub bool);

impl ColorMode {
    pub fn enabled(self) -> bool {
        self.0
    }
}

/// Write one resolution as a single line.
///
/// Suggestions are yellow and misses red when color is on; definitions are
/// always plain.
pub fn print_resolution<W: Write + ?Sized>(
    w: &mut W,
    resolution: &Resolution,
    color: ColorMode,
) -> io::Result<()> {
    let text = resolution.to_string();
    if !color.enabled() {
        return writeln!(w, "{}", text);
    }
    match resolution {
        Resolution::Found { .. } => writeln!(w, "{}", text),
        Resolution::Suggested { .. } => writeln!(w, "{}", text.yellow()),
        Resolution::NotFound { .. } => writeln!(w, "{}", text.red()),
    }
}
