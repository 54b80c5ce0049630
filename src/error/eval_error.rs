/// Represents every error an evaluation can produce.
///
/// Once an evaluation branch produces one of these it stays terminal: folding
/// it with further operands returns it unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalError {
    /// A division had zero as its divisor.
    DivisionByZero,
    /// The operator is accepted by the grammar but has no arithmetic meaning.
    BadOperator,
    /// A numeric literal does not fit into a signed 64-bit integer.
    BadNumber,
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "Division by Zero"),
            Self::BadOperator => write!(f, "Invalid Operator"),
            Self::BadNumber => write!(f, "Invalid Number"),
        }
    }
}

impl std::error::Error for EvalError {}
