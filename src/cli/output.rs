//! Shared CLI output helpers for consistent terminal output.
//!
//! Color scheme (respects NO_COLOR and non-terminal stdout):
//! - Red: errors
//! - Bold: headers
//!
//! Writers are generic so the demo output can be captured in tests.

use console::style;
use std::fmt::Display;
use std::io::{self, Write};

/// Check if color output is enabled for stdout.
fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none() && console::colors_enabled()
}

/// Check if color output is enabled for stderr.
fn colors_enabled_stderr() -> bool {
    std::env::var_os("NO_COLOR").is_none() && console::colors_enabled_stderr()
}

/// Format an error line, with a red marker when stderr supports color.
fn error_line(msg: &str) -> String {
    if colors_enabled_stderr() {
        format!("{} {}", style("✗").red(), msg)
    } else {
        format!("✗ {}", msg)
    }
}

/// Print an error message to stderr (red).
///
/// Example: `✗ entropy unavailable: ...`
pub fn error(msg: &str) {
    eprintln!("{}", error_line(msg));
}

/// Write a bold header line.
///
/// Example: `Remember:`
pub fn header(w: &mut impl Write, title: &str) -> io::Result<()> {
    if colors_enabled() {
        writeln!(w, "{}", style(title).bold())
    } else {
        writeln!(w, "{}", title)
    }
}

/// Write a value on its own line with no styling.
///
/// Used for anything the user is expected to copy verbatim.
pub fn data(w: &mut impl Write, value: impl Display) -> io::Result<()> {
    writeln!(w, "{}", value)
}

/// Write a numbered list item.
///
/// Example: `1. Store this key somewhere very secure.`
pub fn numbered(w: &mut impl Write, n: usize, item: &str) -> io::Result<()> {
    writeln!(w, "{}. {}", n, item)
}

/// Write an empty line.
pub fn blank(w: &mut impl Write) -> io::Result<()> {
    writeln!(w)
}
