use crate::{ast::Operator, error::EvalError, interpreter::value::Value};

/// Combines the accumulator of a fold with the next operand.
///
/// An error already held by the accumulator wins over everything; otherwise
/// an error in the operand is returned; otherwise the operator is applied.
///
/// # Parameters
/// - `left`: The accumulator.
/// - `op`: The operator being folded.
/// - `right`: The newly evaluated operand.
///
/// # Example
/// ```
/// use lispy::{EvalError, Operator, Value, interpreter::evaluator::binary::eval_op};
///
/// let zero = Value::Error(EvalError::DivisionByZero);
/// let bad = Value::Error(EvalError::BadNumber);
///
/// assert_eq!(eval_op(Value::Number(7), Operator::Div, Value::Number(2)), Value::Number(3));
/// assert_eq!(eval_op(zero, Operator::Add, bad), zero);
/// assert_eq!(eval_op(Value::Number(1), Operator::Add, bad), bad);
/// ```
#[must_use]
pub fn eval_op(left: Value, op: Operator, right: Value) -> Value {
    match (left, right) {
        (Value::Error(_), _) => left,
        (_, Value::Error(_)) => right,
        (Value::Number(x), Value::Number(y)) => eval_numbers(x, op, y),
    }
}

/// Applies an operator to two numbers.
///
/// Addition, subtraction and multiplication wrap around on overflow. Division
/// truncates toward zero and reports a zero divisor. `%` and `^` are part of
/// the grammar but have no arithmetic here and yield an invalid operator
/// error.
#[must_use]
pub const fn eval_numbers(x: i64, op: Operator, y: i64) -> Value {
    match op {
        Operator::Add => Value::Number(x.wrapping_add(y)),
        Operator::Sub => Value::Number(x.wrapping_sub(y)),
        Operator::Mul => Value::Number(x.wrapping_mul(y)),
        Operator::Div => {
            if y == 0 {
                Value::Error(EvalError::DivisionByZero)
            } else {
                Value::Number(x.wrapping_div(y))
            }
        },
        Operator::Rem | Operator::Pow => Value::Error(EvalError::BadOperator),
    }
}
