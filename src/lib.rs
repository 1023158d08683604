//! Evaluates dice algebra: integer arithmetic over dice rolls such as `2d6`,
//! `d20`, `4d8h2` (keep the two highest) and `3d10l1` (keep the lowest).
//!
//! ```
//! let evaluation = dice_algebra::roll("4d1h2 * (7 - 2)").unwrap();
//! assert_eq!(evaluation.result, 10);
//! ```

mod common;
mod error;
pub mod roll;
pub mod parse;

pub use common::{BinaryOperator, Int, NonZeroUInt, UInt};
pub use error::DiceError;
pub use parse::{ast::Node, parse, tokenize, Token};
pub use roll::{Evaluation, RollContext, RollError, Roller};

/// Tokenizes, parses and evaluates `input` with a default [`RollContext`].
pub fn roll(input: &str) -> Result<Evaluation, DiceError> {
    roll_with(input, &mut RollContext::default())
}

pub fn roll_with<R: Roller>(
    input: &str,
    ctx: &mut RollContext<R>,
) -> Result<Evaluation, DiceError> {
    let tokens = tokenize(input)?;
    let tree = parse(&tokens)?;
    tracing::debug!(expression = %tree, "parsed expression");
    Ok(ctx.eval(&tree)?)
}
