use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the source input.
///
/// The sign of a negative number is not part of the digit token: whether a
/// `-` is an operator or the start of a number depends on where it appears,
/// which only the parser knows. The parser joins a `Minus` directly followed
/// by `Digits` into one number literal when it expects an operand.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// A run of decimal digits, such as `42` or `007`.
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    Digits(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Digits(digits) => write!(f, "{digits}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Percent => write!(f, "%"),
            Self::Caret => write!(f, "^"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
        }
    }
}

/// A token together with its position in the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spanned {
    /// The token itself.
    pub token:  Token,
    /// Byte offset of the first character.
    pub start:  usize,
    /// Byte offset one past the last character.
    pub end:    usize,
    /// 1-based column of the first character.
    pub column: usize,
}

/// Converts a byte offset of `source` into a 1-based character column.
#[must_use]
pub fn column_at(source: &str, offset: usize) -> usize {
    source[..offset.min(source.len())].chars().count() + 1
}

/// Splits a line into positioned tokens.
///
/// Columns are tracked while scanning, so the whole line is walked once.
///
/// # Errors
/// Returns [`ParseError::UnexpectedCharacter`] for the first character that
/// starts no token.
pub fn tokenize(source: &str) -> Result<Vec<Spanned>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);
    let mut column = 1;
    let mut offset = 0;

    while let Some(token) = lexer.next() {
        let span = lexer.span();
        column += source[offset..span.start].chars().count();
        offset = span.start;
        match token {
            Ok(token) => tokens.push(Spanned { token,
                                               start: span.start,
                                               end: span.end,
                                               column }),
            Err(()) => {
                let character = source[span.start..].chars().next().unwrap_or('\0');
                return Err(ParseError::UnexpectedCharacter { character, column });
            },
        }
    }

    Ok(tokens)
}
