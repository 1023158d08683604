use super::{error::RollError, roller::Roller, RResult, RollContext};
use crate::common::*;
use crate::parse::ast::{Binary, Keep, Literal, LongRoll, Node, ShortRoll};
use tracing::trace;

/// The outcome of evaluating an expression: its value and the narration of
/// every die rolled, in evaluation order.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Evaluation {
    pub result: Int,
    pub description: String,
}

impl Evaluation {
    pub fn new(result: Int, description: String) -> Self {
        Self {
            result,
            description,
        }
    }
}

#[enum_dispatch::enum_dispatch]
pub trait Eval {
    fn eval<R: crate::roll::Roller>(
        &self,
        ctx: &mut crate::roll::RollContext<R>,
    ) -> Result<crate::roll::Evaluation, crate::roll::RollError>;
}

impl Node {
    /// Evaluates the tree with a fresh, unbounded [`RollContext`].
    pub fn execute(&self) -> RResult<Evaluation> {
        RollContext::default().eval(self)
    }
}

fn to_int(x: UInt) -> RResult<Int> {
    Int::try_from(x).map_err(|_| RollError::Overflow)
}

fn sum(values: &[UInt]) -> RResult<Int> {
    values
        .iter()
        .try_fold(0, |acc: Int, &x| acc.checked_add(to_int(x)?).ok_or(RollError::Overflow))
}

impl Eval for Literal {
    fn eval<R: Roller>(&self, _: &mut RollContext<R>) -> RResult<Evaluation> {
        Ok(Evaluation::new(to_int(self.0)?, String::new()))
    }
}

impl Eval for ShortRoll {
    fn eval<R: Roller>(&self, ctx: &mut RollContext<R>) -> RResult<Evaluation> {
        let value = match NonZeroUInt::new(self.faces) {
            Some(faces) => ctx.roll_one(faces)?,
            None => 0,
        };
        trace!(faces = self.faces, value, "rolled short roll");

        Ok(Evaluation::new(
            to_int(value)?,
            format!("\nRolling d{}...\nYou rolled: {}\n", self.faces, value),
        ))
    }
}

const MIN_LINE_LEN: usize = "You rolled: 0\n".len();

impl Eval for LongRoll {
    fn eval<R: Roller>(&self, ctx: &mut RollContext<R>) -> RResult<Evaluation> {
        let header = format!("\nRolling {}d{}...\n", self.die, self.faces);

        let faces = match NonZeroUInt::new(self.faces) {
            Some(faces) if self.die > 0 => faces,
            _ => return Ok(Evaluation::new(0, format!("{}You rolled: 0\n", header))),
        };
        let count = usize::try_from(self.die).map_err(|_| RollError::TooManyRolls)?;

        let draws = ctx.roll(count, faces)?;
        let mut rolls: Vec<UInt> = Vec::new();
        rolls
            .try_reserve_exact(count)
            .map_err(|_| RollError::TooManyRolls)?;
        rolls.extend(draws);

        let mut description = header;
        count
            .checked_mul(MIN_LINE_LEN)
            .and_then(|len| description.try_reserve(len).ok())
            .ok_or(RollError::TooManyRolls)?;
        for value in &rolls {
            description.push_str(&format!("You rolled: {}\n", value));
        }

        // Keeping at least as many dice as were rolled keeps all of them.
        let kept = match self.keep {
            Some(Keep::Lowest(n)) if n < self.die => {
                rolls.sort_unstable();
                &rolls[..n as usize]
            }
            Some(Keep::Highest(n)) if n < self.die => {
                rolls.sort_unstable_by(|a, b| b.cmp(a));
                &rolls[..n as usize]
            }
            _ => &rolls[..],
        };
        let result = sum(kept)?;
        trace!(roll = %self, result, "rolled long roll");

        Ok(Evaluation::new(result, description))
    }
}

impl Eval for Binary {
    fn eval<R: Roller>(&self, ctx: &mut RollContext<R>) -> RResult<Evaluation> {
        use BinaryOperator::*;

        let left = self.left.eval(ctx)?;
        let right = self.right.eval(ctx)?;

        let (l, r) = (left.result, right.result);
        let result = match self.op {
            Add => l.checked_add(r),
            Sub => l.checked_sub(r),
            Mul => l.checked_mul(r),
            Div => {
                if r == 0 {
                    return Err(RollError::DivisionByZero);
                }
                // Truncates toward zero.
                l.checked_div(r)
            }
        }
        .ok_or(RollError::Overflow)?;

        Ok(Evaluation::new(
            result,
            left.description + &right.description,
        ))
    }
}
