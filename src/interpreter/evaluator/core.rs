use log::trace;

use crate::{
    ast::{Expression, Node},
    error::EvalError,
    interpreter::{evaluator::binary::eval_op, value::Value},
};

/// Evaluates a node and returns its value.
///
/// This is the main entry point for evaluation. Numbers are converted from
/// their source text, expressions are folded left to right.
///
/// # Example
/// ```
/// use lispy::{Node, Value, interpreter::evaluator::core::eval};
///
/// assert_eq!(eval(&Node::number("-12")), Value::Number(-12));
/// ```
#[must_use]
pub fn eval(node: &Node) -> Value {
    match node {
        Node::Number { text } => eval_number(text),
        Node::Expression(expr) => eval_expression(expr),
    }
}

/// Converts a number literal to a value.
///
/// Literals outside the range of `i64` become an invalid number error rather
/// than being clamped or wrapped.
#[must_use]
pub fn eval_number(text: &str) -> Value {
    text.parse::<i64>()
        .map_or_else(|_| EvalError::BadNumber.into(), Value::from)
}

/// Folds the operator of an expression across its operands.
///
/// The first operand seeds the accumulator. Every further operand is
/// evaluated before it is combined, even when the accumulator already holds an
/// error; the first error in left-to-right order is the one that survives.
#[must_use]
pub fn eval_expression(expr: &Expression) -> Value {
    let init = eval(&expr.first);

    expr.rest.iter().fold(init, |acc, operand| {
                        let value = eval(operand);
                        let next = eval_op(acc, expr.operator, value);
                        trace!("{acc} {} {value} -> {next}", expr.operator);
                        next
                    })
}
