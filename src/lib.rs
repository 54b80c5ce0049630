//! # lispy
//!
//! lispy is an interpreter for a tiny prefix-notation integer arithmetic
//! language. Each line is an operator followed by its operands, where an
//! operand is a number or a parenthesized group of the same shape:
//!
//! ```text
//! lispy> + 1 (* 2 3) 4
//! 11
//! ```
//!
//! Lines are parsed and evaluated independently; nothing carries over from
//! one line to the next.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed lines.
///
/// This module declares the `Node` enum and the `Expression` it wraps, which
/// together represent a parsed line as an owned tree. The tree is built by
/// the parser and consumed by the evaluator.
///
/// # Responsibilities
/// - Defines the operator symbols of the grammar.
/// - Guarantees at least one operand per expression through its types.
/// - Computes shape statistics of a tree.
pub mod ast;
/// Provides error types for parsing, evaluation and the session loop.
///
/// This module defines the errors raised while lexing or parsing a line, the
/// error kinds an evaluation can produce, and the failures of the surrounding
/// read-evaluate-print loop.
///
/// # Responsibilities
/// - Defines error enums for every failure class.
/// - Attaches columns to parse errors for one-line diagnostics.
/// - Renders the fixed messages of evaluation errors.
pub mod error;
/// Ties together lexing, parsing and evaluation.
///
/// This module holds the phases a line goes through on its way from text to
/// value.
///
/// # Responsibilities
/// - Tokenizes and parses lines against the fixed grammar.
/// - Evaluates syntax trees to values.
pub mod interpreter;
/// Runs the read-evaluate-print loop.
///
/// This module connects a line editor, the interpreter and an output stream.
///
/// # Responsibilities
/// - Defines the `LineEditor` seam and its terminal and script
///   implementations.
/// - Reports values and diagnostics, one line each.
pub mod session;

pub use ast::{Expression, Node, Operator, TreeStats};
pub use error::{EvalError, ParseError, SessionError};
pub use interpreter::value::Value;

/// Parses one line into a syntax tree.
///
/// # Errors
/// Returns a `ParseError` if the line does not match the grammar.
///
/// # Examples
/// ```
/// use lispy::parse;
///
/// let tree = parse("+ 1 (* 2 3) 4").unwrap();
/// assert_eq!(tree.to_string(), "(+ 1 (* 2 3) 4)");
///
/// assert!(parse("()").is_err());
/// ```
pub fn parse(source: &str) -> Result<Node, ParseError> {
    interpreter::parser::core::parse_program(source).map(Node::from)
}

/// Evaluates a syntax tree.
///
/// Evaluation is pure; errors are returned as [`Value::Error`].
#[must_use]
pub fn eval(tree: &Node) -> Value {
    interpreter::evaluator::core::eval(tree)
}

/// Parses and evaluates one line.
///
/// # Errors
/// Returns a `ParseError` if the line does not match the grammar. Evaluation
/// errors are not errors here; they are part of the returned value.
///
/// # Examples
/// ```
/// use lispy::{EvalError, Value, evaluate_line};
///
/// assert_eq!(evaluate_line("+ 1 2").unwrap(), Value::Number(3));
/// assert_eq!(evaluate_line("/ 10 0").unwrap(), Value::Error(EvalError::DivisionByZero));
/// assert!(evaluate_line("+ (+ 1").is_err());
/// ```
pub fn evaluate_line(source: &str) -> Result<Value, ParseError> {
    parse(source).map(|tree| eval(&tree))
}
