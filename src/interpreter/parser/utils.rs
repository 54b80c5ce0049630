use std::iter::Peekable;

use crate::{
    ast::{Node, Operator},
    error::{Expected, Found, ParseError},
    interpreter::{
        lexer::{Spanned, Token},
        parser::core::ParseResult,
    },
};

/// Builds the error for `token` (or the end of input when `None`) appearing
/// where `expected` was required.
///
/// # Parameters
/// - `expected`: What the grammar accepts at this position.
/// - `token`: The offending token, if any.
/// - `end`: Column one past the last character of the line.
pub(in crate::interpreter::parser) fn unexpected(expected: Expected,
                                                 token: Option<&Spanned>,
                                                 end: usize)
                                                 -> ParseError {
    match token {
        Some(spanned) => ParseError::Unexpected { expected,
                                                  found: Found::Token(spanned.token.to_string()),
                                                  column: spanned.column },
        None => ParseError::Unexpected { expected,
                                         found: Found::EndOfInput,
                                         column: end },
    }
}

/// Maps an operator token to its [`Operator`].
///
/// Returns `None` for tokens that are not operator symbols.
#[must_use]
pub const fn operator_of(token: &Token) -> Option<Operator> {
    match token {
        Token::Plus => Some(Operator::Add),
        Token::Minus => Some(Operator::Sub),
        Token::Star => Some(Operator::Mul),
        Token::Slash => Some(Operator::Div),
        Token::Percent => Some(Operator::Rem),
        Token::Caret => Some(Operator::Pow),
        Token::Digits(_) | Token::LParen | Token::RParen => None,
    }
}

/// Parses one operator symbol.
///
/// Grammar: `operator := '+' | '-' | '*' | '/' | '%' | '^'`
///
/// # Errors
/// Returns a `ParseError` if the next token is not an operator or the line
/// ended.
pub(in crate::interpreter::parser) fn parse_operator<'a, I>(tokens: &mut Peekable<I>,
                                                            end: usize)
                                                            -> ParseResult<Operator>
    where I: Iterator<Item = &'a Spanned>
{
    match tokens.next() {
        Some(spanned) => {
            operator_of(&spanned.token).ok_or_else(|| {
                                           unexpected(Expected::Operator, Some(spanned), end)
                                       })
        },
        None => Err(unexpected(Expected::Operator, None, end)),
    }
}

/// Parses the digits of a negative literal after its `-` was consumed.
///
/// The sign belongs to the literal only if the digits follow it directly;
/// `-5` is a number while `- 5` is not.
///
/// Grammar: `number := '-' digit+`
///
/// # Parameters
/// - `tokens`: Token iterator positioned after the `-`.
/// - `minus`: The `-` token that was consumed.
/// - `end`: Column one past the last character of the line.
///
/// # Errors
/// Returns a `ParseError` if no digits follow the sign directly.
pub(in crate::interpreter::parser) fn parse_negative_number<'a, I>(tokens: &mut Peekable<I>,
                                                                   minus: &Spanned,
                                                                   end: usize)
                                                                   -> ParseResult<Node>
    where I: Iterator<Item = &'a Spanned>
{
    match tokens.peek().copied() {
        Some(Spanned { token: Token::Digits(digits),
                       start,
                       .. }) if *start == minus.end => {
            tokens.next();
            Ok(Node::number(format!("-{digits}")))
        },
        Some(spanned) => Err(unexpected(Expected::Digits, Some(spanned), end)),
        None => Err(unexpected(Expected::Digits, None, end)),
    }
}
