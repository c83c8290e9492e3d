//! Bear lexer - tokenization for the Bear scripting language.
//!
//! This crate provides the scanner for Bear, which converts source code into
//! tokens for parsing. Malformed lexemes are reported to a [`DiagnosticSink`]
//! and skipped, so a scan always produces a complete token sequence.
//!
//! # Example
//!
//! ```
//! use bear_lexer::{tokenize, Literal, TokenKind};
//!
//! let (tokens, errors) = tokenize("var x = 42;");
//! assert!(errors.is_empty());
//! assert_eq!(tokens[0].kind, TokenKind::Var);
//! assert_eq!(tokens[3].literal, Literal::Number(42.0));
//! assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
//! ```

pub mod scanner;
pub mod token;

pub use scanner::{tokenize, DiagnosticSink, LexerError, Scanner};
pub use token::{keyword_for, lookup_identifier, Literal, Token, TokenKind};
