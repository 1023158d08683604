use super::error::LexError;
use crate::common::UInt;
use logos::{Lexer, Logos, Span};
use std::fmt;
use tracing::trace;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Token {
    Integer(UInt),
    D,
    H,
    L,
    Add,
    Subtract,
    Multiply,
    Divide,
    OpenParen,
    CloseParen,
}

impl Token {
    pub fn as_str(&self) -> &'static str {
        use Token::*;

        match self {
            Integer(_) => "<integer>",
            D => "'d'",
            H => "'h'",
            L => "'l'",
            Add => "'+'",
            Subtract => "'-'",
            Multiply => "'*'",
            Divide => "'/'",
            OpenParen => "'('",
            CloseParen => "')'",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(x) => fmt::Display::fmt(x, f),
            _ => f.write_str(self.as_str()),
        }
    }
}

// Whitespace inside a run of digits does not end the literal: "1 2" is 12.
#[derive(Logos, Debug, Copy, Clone, PartialEq)]
enum TokenKind {
    #[regex(r"[0-9][0-9 \t\n]*", integer)]
    Integer(UInt),

    #[regex("[dD]")]
    D,
    #[regex("[hH]")]
    H,
    #[regex("[lL]")]
    L,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,

    #[regex(r"[ \t\n]+", logos::skip)]
    #[error]
    Error,
}

fn integer(lex: &mut Lexer<TokenKind>) -> Option<UInt> {
    digits(lex.slice()).parse().ok()
}

fn digits(s: &str) -> String {
    s.chars().filter(char::is_ascii_digit).collect()
}

fn lex_error(input: &str, span: Span) -> LexError {
    let rest = input.get(span.start..).unwrap_or_default();
    match rest.chars().next() {
        // A digit run only fails to lex when it does not fit in `UInt`.
        Some(c) if c.is_ascii_digit() => {
            LexError::NumericOverflow(digits(input.get(span).unwrap_or(rest)))
        }
        Some(c) => LexError::UnexpectedCharacter(c),
        None => LexError::UnexpectedCharacter(char::REPLACEMENT_CHARACTER),
    }
}

/// Splits `input` into tokens, skipping whitespace.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = TokenKind::lexer(input);
    let mut tokens = Vec::new();

    while let Some(kind) = lexer.next() {
        let token = match kind {
            TokenKind::Integer(x) => Token::Integer(x),
            TokenKind::D => Token::D,
            TokenKind::H => Token::H,
            TokenKind::L => Token::L,
            TokenKind::Plus => Token::Add,
            TokenKind::Minus => Token::Subtract,
            TokenKind::Star => Token::Multiply,
            TokenKind::Slash => Token::Divide,
            TokenKind::LeftParen => Token::OpenParen,
            TokenKind::RightParen => Token::CloseParen,
            TokenKind::Error => return Err(lex_error(input, lexer.span())),
        };
        tokens.push(token);
    }

    trace!(?tokens, "tokenized input");
    Ok(tokens)
}
