//! Token types for the Bear scanner.

use std::fmt;

/// Token kinds for the Bear language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    // Single-character tokens
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,

    // One or two character tokens
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    // Literals
    Identifier,
    String,
    Number,

    // Keywords
    And,
    Class,
    Else,
    False,
    Fun,
    For,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,

    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TokenKind::LeftParen => "LEFT_PAREN",
            TokenKind::RightParen => "RIGHT_PAREN",
            TokenKind::LeftBrace => "LEFT_BRACE",
            TokenKind::RightBrace => "RIGHT_BRACE",
            TokenKind::Comma => "COMMA",
            TokenKind::Dot => "DOT",
            TokenKind::Minus => "MINUS",
            TokenKind::Plus => "PLUS",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Slash => "SLASH",
            TokenKind::Star => "STAR",
            TokenKind::Bang => "BANG",
            TokenKind::BangEqual => "BANG_EQUAL",
            TokenKind::Equal => "EQUAL",
            TokenKind::EqualEqual => "EQUAL_EQUAL",
            TokenKind::Greater => "GREATER",
            TokenKind::GreaterEqual => "GREATER_EQUAL",
            TokenKind::Less => "LESS",
            TokenKind::LessEqual => "LESS_EQUAL",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::String => "STRING",
            TokenKind::Number => "NUMBER",
            TokenKind::And => "AND",
            TokenKind::Class => "CLASS",
            TokenKind::Else => "ELSE",
            TokenKind::False => "FALSE",
            TokenKind::Fun => "FUN",
            TokenKind::For => "FOR",
            TokenKind::If => "IF",
            TokenKind::Nil => "NIL",
            TokenKind::Or => "OR",
            TokenKind::Print => "PRINT",
            TokenKind::Return => "RETURN",
            TokenKind::Super => "SUPER",
            TokenKind::This => "THIS",
            TokenKind::True => "TRUE",
            TokenKind::Var => "VAR",
            TokenKind::While => "WHILE",
            TokenKind::Eof => "EOF",
        };
        write!(f, "{}", s)
    }
}

/// Look up a reserved word. Matching is exact and case-sensitive.
pub fn keyword_for(ident: &str) -> Option<TokenKind> {
    let kind = match ident {
        "and" => TokenKind::And,
        "class" => TokenKind::Class,
        "else" => TokenKind::Else,
        "false" => TokenKind::False,
        "for" => TokenKind::For,
        "fun" => TokenKind::Fun,
        "if" => TokenKind::If,
        "nil" => TokenKind::Nil,
        "or" => TokenKind::Or,
        "print" => TokenKind::Print,
        "return" => TokenKind::Return,
        "super" => TokenKind::Super,
        "this" => TokenKind::This,
        "true" => TokenKind::True,
        "var" => TokenKind::Var,
        "while" => TokenKind::While,
        _ => return None,
    };
    Some(kind)
}

/// Look up an identifier to see if it's a keyword.
pub fn lookup_identifier(ident: &str) -> TokenKind {
    keyword_for(ident).unwrap_or(TokenKind::Identifier)
}

/// The literal value carried by a token.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Literal {
    #[default]
    Empty,
    Number(f64),
    String(String),
}

impl Literal {
    pub fn is_empty(&self) -> bool {
        matches!(self, Literal::Empty)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Literal::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Empty => write!(f, "nil"),
            // Whole numbers keep their fractional digit: `1.0`, not `1`.
            Literal::Number(n) => write!(f, "{:?}", n),
            Literal::String(s) => write!(f, "{}", s),
        }
    }
}

/// A token produced by the scanner.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The source text of the token. Empty only for `Eof`.
    pub lexeme: String,
    /// Value of a `Number` or `String` token.
    pub literal: Literal,
    /// 1-indexed line on which the token starts.
    pub line: usize,
}

impl Token {
    /// Create a new Token.
    pub fn new(kind: TokenKind, lexeme: String, literal: Literal, line: usize) -> Self {
        Self {
            kind,
            lexeme,
            literal,
            line,
        }
    }

    /// The end-of-input marker.
    pub fn eof(line: usize) -> Self {
        Self::new(TokenKind::Eof, String::new(), Literal::Empty, line)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.kind, self.lexeme, self.literal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_identifier() {
        assert_eq!(lookup_identifier("and"), TokenKind::And);
        assert_eq!(lookup_identifier("while"), TokenKind::While);
        assert_eq!(lookup_identifier("foo"), TokenKind::Identifier);
        assert_eq!(lookup_identifier("forest"), TokenKind::Identifier);
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        assert_eq!(keyword_for("class"), Some(TokenKind::Class));
        assert_eq!(keyword_for("Class"), None);
        assert_eq!(keyword_for("NIL"), None);
    }

    #[test]
    fn test_every_keyword_round_trips_through_display() {
        let words = [
            "and", "class", "else", "false", "for", "fun", "if", "nil", "or", "print", "return",
            "super", "this", "true", "var", "while",
        ];
        for word in words {
            let kind = keyword_for(word).unwrap();
            assert_eq!(kind.to_string(), word.to_uppercase());
        }
    }

    #[test]
    fn test_literal_display() {
        assert_eq!(Literal::Empty.to_string(), "nil");
        assert_eq!(Literal::Number(1.0).to_string(), "1.0");
        assert_eq!(Literal::Number(123.0).to_string(), "123.0");
        assert_eq!(Literal::Number(2.5).to_string(), "2.5");
        assert_eq!(Literal::String("hi".to_string()).to_string(), "hi");
    }

    #[test]
    fn test_token_display() {
        let tok = Token::new(TokenKind::Number, "12.50".to_string(), Literal::Number(12.5), 1);
        assert_eq!(tok.to_string(), "NUMBER 12.50 12.5");

        let tok = Token::new(TokenKind::Number, "1".to_string(), Literal::Number(1.0), 1);
        assert_eq!(tok.to_string(), "NUMBER 1 1.0");

        let tok = Token::new(TokenKind::BangEqual, "!=".to_string(), Literal::Empty, 1);
        assert_eq!(tok.to_string(), "BANG_EQUAL != nil");
    }

    #[test]
    fn test_eof_token() {
        let tok = Token::eof(4);
        assert_eq!(tok.kind, TokenKind::Eof);
        assert!(tok.lexeme.is_empty());
        assert!(tok.literal.is_empty());
        assert_eq!(tok.line, 4);
    }
}
