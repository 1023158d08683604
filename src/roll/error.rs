use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, Eq, PartialEq)]
pub enum RollError {
    #[error("Division by zero is not allowed.")]
    DivisionByZero,
    #[error("too many dice rolled")]
    TooManyRolls,
    #[error("arithmetic overflow")]
    Overflow,
}
