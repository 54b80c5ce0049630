/// The evaluator module reduces syntax trees to values.
///
/// The evaluator walks the tree produced by the parser, converts number
/// literals and folds each operator across its operands. It has no state and
/// no side effects: evaluating the same tree twice yields the same value.
///
/// # Responsibilities
/// - Converts literals to `i64`, reporting out-of-range numbers.
/// - Applies the four arithmetic operators, reporting division by zero.
/// - Rejects the operators the grammar admits but arithmetic does not define.
pub mod evaluator;
/// The lexer module tokenizes a line for the parser.
///
/// The lexer reads the raw line and produces positioned tokens for digits,
/// operator symbols and parentheses, skipping whitespace.
///
/// # Responsibilities
/// - Converts the input characters into tokens with byte spans and columns.
/// - Reports characters that start no token.
pub mod lexer;
/// The parser module builds the syntax tree from tokens.
///
/// The parser checks the token stream against the fixed grammar and builds an
/// owned tree of numbers and expressions, or reports where the line stops
/// matching the grammar.
///
/// # Responsibilities
/// - Joins signed number literals.
/// - Requires at least one operand per operator.
/// - Limits nesting depth.
pub mod parser;
/// The value module defines the result of an evaluation.
///
/// A value is either a number or a typed evaluation error, and knows how to
/// render itself for output.
pub mod value;
