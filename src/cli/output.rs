//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.
//! Write failures on the console are ignored: there is nowhere left to report them.

use std::io::Write;

use colored::Colorize;

/// Print error (red bold "error:" prefix)
pub fn error(w: &mut dyn Write, msg: &(impl std::fmt::Display + ?Sized)) {
    writeln!(w, "{}: {}", "error".red().bold(), msg).ok();
}

/// Print a hint line after a blank line (e.g. where to get more help)
pub fn hint(w: &mut dyn Write, msg: &(impl std::fmt::Display + ?Sized)) {
    writeln!(w, "\n{}", msg).ok();
}

/// Print pre-rendered text verbatim (help, usage, version)
pub fn raw(w: &mut dyn Write, text: &str) {
    w.write_all(text.as_bytes()).ok();
    w.flush().ok();
}
