/// Parsing errors.
///
/// Defines all error types that can occur while lexing and parsing a line.
/// A parse error is terminal for its line only: the line is reported and
/// skipped, and the session moves on to the next one.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains the error kinds an evaluation can produce. These are not returned
/// through `Result`; they travel inside [`crate::interpreter::value::Value`]
/// and are rendered like any other result.
pub mod eval_error;
/// Session errors.
///
/// Failures of the surrounding loop itself, such as a broken output stream or
/// a line editor that can no longer read input.
pub mod session_error;

pub use eval_error::EvalError;
pub use parse_error::{Expected, Found, ParseError};
pub use session_error::SessionError;
