use crate::parse::{LexError, ParseError};
use crate::roll::RollError;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum DiceError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Roll(#[from] RollError),
}

impl DiceError {
    /// Whether this error describes a problem with the user's expression, as
    /// opposed to a limit of the evaluator.
    pub fn is_domain_error(&self) -> bool {
        !matches!(
            self,
            Self::Lex(LexError::NumericOverflow(_)) | Self::Roll(RollError::Overflow)
        )
    }
}
