//! Driver-side diagnostic sink.

use std::io::{self, Write};

use bear_lexer::{DiagnosticSink, LexerError};

/// Prints diagnostics as `[line N] Error: message` and remembers that an
/// error happened.
///
/// The flag is what the driver consults to choose an exit code. The REPL
/// calls [`Reporter::reset`] after every entry.
pub struct Reporter<W: Write = io::Stderr> {
    out: W,
    error_count: usize,
}

impl Reporter<io::Stderr> {
    /// A reporter writing to standard error.
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            error_count: 0,
        }
    }

    /// Report a message against a line.
    pub fn error(&mut self, line: usize, message: &str) {
        self.report_at(line, "", message);
    }

    fn report_at(&mut self, line: usize, location: &str, message: &str) {
        let _ = writeln!(self.out, "[line {}] Error{}: {}", line, location, message);
        self.error_count += 1;
    }

    pub fn had_error(&self) -> bool {
        self.error_count > 0
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Forget previous errors.
    pub fn reset(&mut self) {
        self.error_count = 0;
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DiagnosticSink for Reporter<W> {
    fn report(&mut self, error: LexerError) {
        self.error(error.line(), &error.to_string());
    }
}
