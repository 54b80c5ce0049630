/// Name under which diagnostics refer to the input line.
pub const SOURCE_NAME: &str = "<stdin>";

/// What the parser was looking for when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// One of the six operator symbols.
    Operator,
    /// A number or an opening parenthesis.
    Operand,
    /// Another operand or the closing parenthesis of the current group.
    OperandOrClose,
    /// Another operand or the end of the line.
    OperandOrEnd,
    /// Digits directly after a `-` that starts a number.
    Digits,
}

impl std::fmt::Display for Expected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Operator => write!(f, "one of '+', '-', '*', '/', '%' or '^'"),
            Self::Operand => write!(f, "a number or '('"),
            Self::OperandOrClose => write!(f, "a number, '(' or ')'"),
            Self::OperandOrEnd => write!(f, "a number, '(' or end of input"),
            Self::Digits => write!(f, "digits after '-'"),
        }
    }
}

/// What the parser found instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Found {
    /// A well-formed token, by its source text.
    Token(String),
    /// The line ended.
    EndOfInput,
}

impl std::fmt::Display for Found {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Token(text) => write!(f, "'{text}'"),
            Self::EndOfInput => write!(f, "end of input"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// A character that starts no token.
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// The 1-based column of the character.
        column:    usize,
    },
    /// A token or the end of input appeared where the grammar does not allow
    /// it.
    Unexpected {
        /// What would have been accepted at this position.
        expected: Expected,
        /// What was there instead.
        found:    Found,
        /// The 1-based column of the offending token, or one past the last
        /// character for the end of input.
        column:   usize,
    },
    /// Parentheses are nested deeper than the parser accepts.
    NestingTooDeep {
        /// The maximum accepted nesting depth.
        limit:  usize,
        /// The 1-based column of the parenthesis that exceeded the limit.
        column: usize,
    },
}

impl ParseError {
    /// The 1-based column the error points at.
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { column, .. }
            | Self::Unexpected { column, .. }
            | Self::NestingTooDeep { column, .. } => *column,
        }
    }

    /// Renders the source line with a caret under the offending column,
    /// followed by the one-line diagnostic.
    ///
    /// # Example
    /// ```
    /// use lispy::parse;
    ///
    /// let source = "+ 1 (* 2";
    /// let err = parse(source).unwrap_err();
    /// assert_eq!(err.render(source),
    ///            "+ 1 (* 2\n        ^\n<stdin>:1:9: error: expected a number, '(' or ')' at end of input");
    /// ```
    #[must_use]
    pub fn render(&self, source: &str) -> String {
        let marker = format!("{}^", " ".repeat(self.column().saturating_sub(1)));
        format!("{source}\n{marker}\n{self}")
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { character, column } => {
                write!(f, "{SOURCE_NAME}:1:{column}: error: unexpected character '{character}'")
            },
            Self::Unexpected { expected,
                               found,
                               column, } => {
                write!(f, "{SOURCE_NAME}:1:{column}: error: expected {expected} at {found}")
            },
            Self::NestingTooDeep { limit, column } => {
                write!(f,
                       "{SOURCE_NAME}:1:{column}: error: parentheses nested deeper than {limit} levels")
            },
        }
    }
}

impl std::error::Error for ParseError {}
