use thiserror::Error;

#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum LexError {
    #[error("Unexpected character in input: '{0}'")]
    UnexpectedCharacter(char),
    #[error("integer literal {0} is too large")]
    NumericOverflow(String),
}

/// Every grammar failure surfaces as [`ParseError::InvalidExpression`]; the
/// offending token is only reported through `tracing`.
#[derive(Error, Debug, Copy, Clone, Eq, PartialEq)]
pub enum ParseError {
    #[error("Empty input.")]
    EmptyInput,
    #[error("Expression contains an unclosed parenthetical.")]
    UnbalancedParenthesis,
    #[error("Input expression is not valid.")]
    InvalidExpression,
}
