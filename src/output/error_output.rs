//! Error reporting on stderr.
//!
//! Format: `✖ {error_type}: {message}` / `  × {detail}` / `  help: {suggestion}`

use std::io::{IsTerminal, Write};

use crate::error::BuildLogError;

mod ansi {
    pub const HEADING: &str = "\x1b[1m\x1b[31m";
    pub const DIM: &str = "\x1b[2m";
    pub const CYAN: &str = "\x1b[36m";
    pub const RESET: &str = "\x1b[0m";
}

pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    #[must_use]
    pub const fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Colors only when stderr is a TTY and `NO_COLOR` is unset.
    #[must_use]
    pub fn stderr() -> Self {
        let use_colors =
            std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal();
        Self::new(use_colors)
    }

    pub fn print(&self, error: &BuildLogError) {
        let mut stderr = std::io::stderr().lock();
        self.write(&mut stderr, error);
    }

    /// Writes the error report to `w`. Write failures are ignored.
    pub fn write<W: Write>(&self, w: &mut W, error: &BuildLogError) {
        let (heading, dim, help, reset) = if self.use_colors {
            (ansi::HEADING, ansi::DIM, ansi::CYAN, ansi::RESET)
        } else {
            ("", "", "", "")
        };

        let error_type = error.error_type();
        let _ = writeln!(w, "{heading}✖ {error_type}:{reset} {error}");

        if let Some(detail) = error.detail() {
            let _ = writeln!(w, "  {dim}× {detail}{reset}");
        }

        if let Some(suggestion) = error.suggestion() {
            let _ = writeln!(w, "  {help}help:{reset} {suggestion}");
        }
    }
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
