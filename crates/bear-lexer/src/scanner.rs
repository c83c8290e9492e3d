//! Scanner for the Bear scripting language.

use crate::token::{lookup_identifier, Literal, Token, TokenKind};
use thiserror::Error;

/// Errors that can occur during scanning.
///
/// None of these stop the scan. They are handed to a [`DiagnosticSink`]
/// and the scanner carries on with the next character.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexerError {
    #[error("Unterminated string.")]
    UnterminatedString { line: usize },

    #[error("Unexpected character '{ch}'.")]
    UnexpectedCharacter { ch: char, line: usize },
}

impl LexerError {
    /// The 1-indexed line the error was detected on.
    pub fn line(&self) -> usize {
        match self {
            LexerError::UnterminatedString { line } => *line,
            LexerError::UnexpectedCharacter { line, .. } => *line,
        }
    }
}

/// Receives diagnostics for malformed lexemes as the scanner finds them.
pub trait DiagnosticSink {
    fn report(&mut self, error: LexerError);
}

impl DiagnosticSink for Vec<LexerError> {
    fn report(&mut self, error: LexerError) {
        self.push(error);
    }
}

/// Scanner turns Bear source code into tokens.
///
/// A scanner is built for one source buffer and consumed by
/// [`Scanner::scan_tokens`].
pub struct Scanner {
    chars: Vec<char>,
    tokens: Vec<Token>,
    start: usize,
    current: usize,
    line: usize,
    start_line: usize,
}

impl Scanner {
    /// Create a new scanner for the given source.
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            tokens: Vec::new(),
            start: 0,
            current: 0,
            line: 1,
            start_line: 1,
        }
    }

    /// Scan the whole source, reporting malformed lexemes to `sink`.
    ///
    /// Always returns a complete sequence ending in a single `Eof` token.
    pub fn scan_tokens<S>(mut self, sink: &mut S) -> Vec<Token>
    where
        S: DiagnosticSink + ?Sized,
    {
        while !self.is_at_end() {
            self.start = self.current;
            self.start_line = self.line;
            self.scan_token(sink);
        }

        self.tokens.push(Token::eof(self.line));
        self.tokens
    }

    fn scan_token<S>(&mut self, sink: &mut S)
    where
        S: DiagnosticSink + ?Sized,
    {
        let ch = self.advance();
        match ch {
            '(' => self.add_token(TokenKind::LeftParen),
            ')' => self.add_token(TokenKind::RightParen),
            '{' => self.add_token(TokenKind::LeftBrace),
            '}' => self.add_token(TokenKind::RightBrace),
            ',' => self.add_token(TokenKind::Comma),
            '.' => self.add_token(TokenKind::Dot),
            '-' => self.add_token(TokenKind::Minus),
            '+' => self.add_token(TokenKind::Plus),
            ';' => self.add_token(TokenKind::Semicolon),
            '*' => self.add_token(TokenKind::Star),
            '!' => {
                let kind = if self.match_char('=') {
                    TokenKind::BangEqual
                } else {
                    TokenKind::Bang
                };
                self.add_token(kind);
            }
            '=' => {
                let kind = if self.match_char('=') {
                    TokenKind::EqualEqual
                } else {
                    TokenKind::Equal
                };
                self.add_token(kind);
            }
            '<' => {
                let kind = if self.match_char('=') {
                    TokenKind::LessEqual
                } else {
                    TokenKind::Less
                };
                self.add_token(kind);
            }
            '>' => {
                let kind = if self.match_char('=') {
                    TokenKind::GreaterEqual
                } else {
                    TokenKind::Greater
                };
                self.add_token(kind);
            }
            '/' => {
                if self.match_char('/') {
                    self.skip_to_end_of_line();
                } else {
                    self.add_token(TokenKind::Slash);
                }
            }
            ' ' | '\r' | '\t' => {}
            '\n' => self.line += 1,
            '"' => self.read_string(sink),
            c if c.is_ascii_digit() => self.read_number(),
            c if is_letter(c) => self.read_identifier(),
            c => sink.report(LexerError::UnexpectedCharacter {
                ch: c,
                line: self.line,
            }),
        }
    }

    /// Skip a line comment, leaving the newline for the main loop.
    fn skip_to_end_of_line(&mut self) {
        while self.peek() != '\n' && !self.is_at_end() {
            self.advance();
        }
    }

    /// Read an identifier or keyword.
    fn read_identifier(&mut self) {
        while is_letter(self.peek()) || self.peek().is_ascii_digit() {
            self.advance();
        }
        let kind = lookup_identifier(&self.lexeme());
        self.add_token(kind);
    }

    /// Read a number literal with an optional fractional part.
    fn read_number(&mut self) {
        while self.peek().is_ascii_digit() {
            self.advance();
        }

        // A trailing '.' without a digit after it is left for the DOT token.
        if self.peek() == '.' && self.peek_next().is_ascii_digit() {
            self.advance(); // consume .
            while self.peek().is_ascii_digit() {
                self.advance();
            }
        }

        let value: f64 = self.lexeme().parse().unwrap_or_default();
        self.add_literal(TokenKind::Number, Literal::Number(value));
    }

    /// Read a string literal. Strings may span lines and have no escapes.
    fn read_string<S>(&mut self, sink: &mut S)
    where
        S: DiagnosticSink + ?Sized,
    {
        while self.peek() != '"' && !self.is_at_end() {
            if self.peek() == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.is_at_end() {
            sink.report(LexerError::UnterminatedString { line: self.line });
            return;
        }

        self.advance(); // consume closing quote

        let value: String = self.chars[self.start + 1..self.current - 1].iter().collect();
        self.add_literal(TokenKind::String, Literal::String(value));
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.chars.len()
    }

    fn advance(&mut self) -> char {
        let ch = self.chars[self.current];
        self.current += 1;
        ch
    }

    /// Consume the next character only if it is `expected`.
    fn match_char(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.chars[self.current] != expected {
            return false;
        }
        self.current += 1;
        true
    }

    fn peek(&self) -> char {
        self.chars.get(self.current).copied().unwrap_or('\0')
    }

    fn peek_next(&self) -> char {
        self.chars.get(self.current + 1).copied().unwrap_or('\0')
    }

    fn lexeme(&self) -> String {
        self.chars[self.start..self.current].iter().collect()
    }

    fn add_token(&mut self, kind: TokenKind) {
        self.add_literal(kind, Literal::Empty);
    }

    fn add_literal(&mut self, kind: TokenKind, literal: Literal) {
        let lexeme = self.lexeme();
        self.tokens
            .push(Token::new(kind, lexeme, literal, self.start_line));
    }
}

/// Check if a character can start an identifier.
fn is_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

/// Scan an input string, collecting diagnostics instead of printing them.
pub fn tokenize(input: &str) -> (Vec<Token>, Vec<LexerError>) {
    let mut errors = Vec::new();
    let tokens = Scanner::new(input).scan_tokens(&mut errors);
    (tokens, errors)
}
