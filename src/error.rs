use thiserror::Error as ThisError;

/// Error type for the mathex crate.
///
/// There is one variant per evaluation stage, in pipeline order. The first
/// failing stage aborts the whole evaluation.
#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum Error {
    /// The caller supplied arguments of the wrong shape or type
    #[error("InputError: {0}")]
    Input(String),
    /// Unrecognized character or lexeme in the formula
    #[error("TokenizationError: {message} at position {position}: '{excerpt}'")]
    Tokenize {
        /// Character position of the failure, starting at 0
        position: usize,
        /// The input starting at `position`, shortened for display
        excerpt: String,
        /// What went wrong
        message: String,
    },
    /// A structural rule of the language was violated
    #[error("SyntaxError: {0}")]
    Syntax(String),
    /// Unbalanced parenthesis or a misplaced comma while building the postfix
    /// program
    #[error("StackError: {0}")]
    Stack(String),
    /// An operator or a function lacks the operands it needs
    #[error("ArgumentCountError: {0}")]
    ArgumentCount(String),
    /// The postfix program did not reduce to exactly one value
    #[error("ExecutionError: {0}")]
    Execution(String),
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn display() {
        assert_eq!(
            Error::Syntax("no value".into()).to_string(),
            "SyntaxError: no value"
        );
        let err = Error::Tokenize {
            position: 2,
            excerpt: "$ 1".into(),
            message: "unexpected character".into(),
        };
        assert_eq!(
            err.to_string(),
            "TokenizationError: unexpected character at position 2: '$ 1'"
        );
    }
}
