use std::iter::Peekable;

use log::debug;

use crate::{
    ast::{Expression, Node},
    error::{Expected, ParseError},
    interpreter::{
        lexer::{Spanned, Token, column_at, tokenize},
        parser::utils::{parse_negative_number, parse_operator, unexpected},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest parenthesis nesting the parser accepts.
///
/// Parsing and evaluation both recurse once per level, so the limit keeps
/// pathological input from exhausting the stack.
pub const MAX_DEPTH: usize = 256;

/// Parses a whole line as a program.
///
/// This is the entry point for parsing. The program must cover the complete
/// line: leading and trailing whitespace is ignored, anything else left over
/// is an error.
///
/// Grammar: `program := start-of-input operator expr+ end-of-input`
///
/// # Parameters
/// - `source`: One line of input without its line terminator.
///
/// # Returns
/// The program as an [`Expression`].
///
/// # Errors
/// Returns a `ParseError` describing the first position where the line does
/// not match the grammar.
pub fn parse_program(source: &str) -> ParseResult<Expression> {
    let tokens = tokenize(source)?;
    let end = column_at(source, source.len());
    let mut iter = tokens.iter().peekable();

    let operator = parse_operator(&mut iter, end)?;
    let first = parse_operand(&mut iter, end, Expected::Operand, 0)?;

    let mut rest = Vec::new();
    while iter.peek().is_some() {
        rest.push(parse_operand(&mut iter, end, Expected::OperandOrEnd, 0)?);
    }

    let program = Expression::new(operator, first, rest);
    debug!("parsed {} operand(s) for '{}'", program.arity(), program.operator);
    Ok(program)
}

/// Parses a single operand.
///
/// Grammar: `expr := number | '(' operator expr+ ')'`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the operand.
/// - `end`: Column one past the last character of the line.
/// - `expected`: What to report if no operand starts here.
/// - `depth`: Number of groups enclosing this operand.
///
/// # Returns
/// A [`Node::Number`] or a [`Node::Expression`].
///
/// # Errors
/// Returns a `ParseError` if no operand starts at the current token or the
/// operand itself is malformed.
pub fn parse_operand<'a, I>(tokens: &mut Peekable<I>,
                            end: usize,
                            expected: Expected,
                            depth: usize)
                            -> ParseResult<Node>
    where I: Iterator<Item = &'a Spanned>
{
    let Some(spanned) = tokens.next() else {
        return Err(unexpected(expected, None, end));
    };

    match &spanned.token {
        Token::Digits(digits) => Ok(Node::number(digits.as_str())),
        Token::Minus => parse_negative_number(tokens, spanned, end),
        Token::LParen => {
            if depth >= MAX_DEPTH {
                return Err(ParseError::NestingTooDeep { limit:  MAX_DEPTH,
                                                        column: spanned.column, });
            }
            parse_group(tokens, end, depth + 1).map(Node::from)
        },
        _ => Err(unexpected(expected, Some(spanned), end)),
    }
}

/// Parses a parenthesized group after its opening parenthesis.
///
/// At least one operand is required, so `()` and `(+)` are rejected.
///
/// Grammar: `group := operator expr+ ')'`
///
/// # Parameters
/// - `tokens`: Token iterator positioned after `(`.
/// - `end`: Column one past the last character of the line.
/// - `depth`: Nesting depth of this group.
///
/// # Errors
/// Returns a `ParseError` if the operator or first operand is missing, an
/// operand is malformed, or the closing parenthesis is never found.
fn parse_group<'a, I>(tokens: &mut Peekable<I>, end: usize, depth: usize) -> ParseResult<Expression>
    where I: Iterator<Item = &'a Spanned>
{
    let operator = parse_operator(tokens, end)?;
    let first = parse_operand(tokens, end, Expected::Operand, depth)?;

    let mut rest = Vec::new();
    loop {
        match tokens.peek() {
            Some(Spanned { token: Token::RParen,
                           .. }) => {
                tokens.next();
                break;
            },
            Some(_) => rest.push(parse_operand(tokens, end, Expected::OperandOrClose, depth)?),
            None => return Err(unexpected(Expected::OperandOrClose, None, end)),
        }
    }

    Ok(Expression::new(operator, first, rest))
}
