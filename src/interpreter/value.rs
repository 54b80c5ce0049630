use crate::error::EvalError;

/// Represents the result of evaluating a syntax tree.
///
/// Evaluation never fails through `Result`: an error is an ordinary value
/// that flows through the rest of the fold and is rendered like a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    /// A signed 64-bit integer.
    Number(i64),
    /// A typed evaluation error.
    Error(EvalError),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Number(v)
    }
}

impl From<EvalError> for Value {
    fn from(e: EvalError) -> Self {
        Self::Error(e)
    }
}

impl Value {
    /// Returns the number, or `None` for an error.
    #[must_use]
    pub const fn as_number(self) -> Option<i64> {
        match self {
            Self::Number(n) => Some(n),
            Self::Error(_) => None,
        }
    }

    /// Returns the error kind, or `None` for a number.
    #[must_use]
    pub const fn as_error(self) -> Option<EvalError> {
        match self {
            Self::Number(_) => None,
            Self::Error(e) => Some(e),
        }
    }

    /// Returns `true` if the value is an error.
    #[must_use]
    pub const fn is_error(self) -> bool {
        matches!(self, Self::Error(_))
    }
}

impl std::fmt::Display for Value {
    /// Renders exactly one of a decimal numeral or an error message.
    ///
    /// # Example
    /// ```
    /// use lispy::{EvalError, Value};
    ///
    /// assert_eq!(Value::Number(-4).to_string(), "-4");
    /// assert_eq!(Value::Error(EvalError::DivisionByZero).to_string(),
    ///            "Error: Division by Zero");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Error(e) => write!(f, "Error: {e}"),
        }
    }
}
