//! Bear - the front end of a small dynamically-typed scripting language.
//!
//! Only the lexical stage exists today: source text is scanned into tokens,
//! and malformed lexemes are reported without stopping the scan.
//!
//! # Example
//!
//! ```
//! use bear::{check, TokenKind};
//!
//! let tokens = check("print 1 + 2;").unwrap();
//! assert_eq!(tokens[0].kind, TokenKind::Print);
//! assert_eq!(tokens.len(), 6);
//!
//! let err = check("print @;").unwrap_err();
//! assert_eq!(err.errors.len(), 1);
//! ```

use std::fmt;

pub use bear_lexer as lexer;

pub mod exit;
mod reporter;

// Re-export commonly used types
pub use bear_lexer::{tokenize, DiagnosticSink, LexerError, Literal, Scanner, Token, TokenKind};
pub use reporter::Reporter;

/// Error type for check operations.
#[derive(Debug)]
pub struct ScanError {
    /// Every diagnostic found, in source order.
    pub errors: Vec<LexerError>,
    /// The best-effort token sequence, still ending in `Eof`.
    pub tokens: Vec<Token>,
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.errors.as_slice() {
            [] => write!(f, "scan failed"),
            [only] => write!(f, "[line {}] {}", only.line(), only),
            [first, rest @ ..] => write!(
                f,
                "[line {}] {} (and {} more)",
                first.line(),
                first,
                rest.len()
            ),
        }
    }
}

impl std::error::Error for ScanError {}

/// Scan Bear source code, reporting diagnostics to `sink`.
///
/// This is what the driver calls for a file, an `-e` argument or a REPL
/// entry. It never fails; whether the run counts as failed is up to the sink.
pub fn run<S>(source: &str, sink: &mut S) -> Vec<Token>
where
    S: DiagnosticSink + ?Sized,
{
    Scanner::new(source).scan_tokens(sink)
}

/// Scan Bear source code and fail if any diagnostic was reported.
///
/// # Example
///
/// ```
/// use bear::check;
///
/// let err = check("\"open").unwrap_err();
/// assert_eq!(err.to_string(), "[line 1] Unterminated string.");
/// ```
pub fn check(source: &str) -> Result<Vec<Token>, ScanError> {
    let (tokens, errors) = tokenize(source);
    if errors.is_empty() {
        Ok(tokens)
    } else {
        Err(ScanError { errors, tokens })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_ok(source: &str) -> Vec<Token> {
        check(source).unwrap_or_else(|e| panic!("check failed for: {}: {}", source, e))
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        check_ok(source).iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_check_ok() {
        assert_eq!(
            kinds("1+2"),
            vec![
                TokenKind::Number,
                TokenKind::Plus,
                TokenKind::Number,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_check_keeps_tokens_on_error() {
        let err = check("@+1").unwrap_err();
        assert_eq!(err.errors, vec![LexerError::UnexpectedCharacter { ch: '@', line: 1 }]);
        let kinds: Vec<_> = err.tokens.iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![TokenKind::Plus, TokenKind::Number, TokenKind::Eof]);
    }

    #[test]
    fn test_scan_error_display() {
        let err = check("@\n#").unwrap_err();
        assert_eq!(err.to_string(), "[line 1] Unexpected character '@'. (and 1 more)");
    }

    #[test]
    fn test_run_with_reporter() {
        let mut reporter = Reporter::new(Vec::new());
        let tokens = run("var a = \"x\";\n!", &mut reporter);
        assert!(!reporter.had_error());
        assert_eq!(tokens.len(), 7);
        assert_eq!(tokens[5].kind, TokenKind::Bang);
        assert_eq!(tokens[5].line, 2);

        let tokens = run("a ~ b", &mut reporter);
        assert!(reporter.had_error());
        assert_eq!(tokens.len(), 3);
        let out = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(out, "[line 1] Error: Unexpected character '~'.\n");
    }

    #[test]
    fn test_run_with_vec_sink() {
        let mut errors: Vec<LexerError> = Vec::new();
        let tokens = run("", &mut errors);
        assert!(errors.is_empty());
        assert_eq!(tokens, vec![Token::eof(1)]);
    }

    #[test]
    fn test_program() {
        let source = r#"
class Greeter {
  greet(name) {
    print "hi " + name;
  }
}

// entry point
var g = Greeter();
if (g != nil and true) g.greet("bear");
"#;
        let tokens = check_ok(source);
        assert_eq!(tokens[0].kind, TokenKind::Class);
        assert_eq!(tokens[0].line, 2);
        assert!(tokens.iter().any(|t| t.kind == TokenKind::BangEqual));
        assert!(tokens.iter().any(|t| t.kind == TokenKind::And));
        let eof = tokens.last().unwrap();
        assert_eq!(eof.kind, TokenKind::Eof);
        assert_eq!(eof.line, 11);
    }
}
