/// Program, group and operand parsing.
///
/// Implements the recursive descent over the grammar: a program is an
/// operator followed by one or more operands, and an operand is either a
/// number or a parenthesized group of the same shape.
pub mod core;

/// Helpers for single tokens.
///
/// Converts operator tokens, joins signed number literals and builds the
/// errors reported for unexpected tokens.
pub mod utils;
