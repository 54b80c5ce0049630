use rustyline::error::ReadlineError;

#[derive(Debug)]
/// Represents failures of the read-evaluate-print loop itself.
pub enum SessionError {
    /// Writing results or reading a script failed.
    Io(std::io::Error),
    /// The line editor failed for a reason other than an interrupt or the
    /// end of input.
    Readline(ReadlineError),
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Readline(e) => write!(f, "Line editor error: {e}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Readline(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for SessionError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ReadlineError> for SessionError {
    fn from(e: ReadlineError) -> Self {
        Self::Readline(e)
    }
}
