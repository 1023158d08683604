use super::{error::RollError, roller::Roller, Eval, Evaluation, RResult};
use crate::common::*;
use crate::parse::ast::Node;
use rand::{rngs::StdRng, SeedableRng};
use tracing::debug;

pub type DefaultRoller = rand::rngs::ThreadRng;

/// Evaluation state: the random source and the running count of dice rolled.
pub struct RollContext<R = DefaultRoller> {
    max_rolls: Option<usize>,
    rolls: usize,
    roller: R,
}

impl<R: Roller> RollContext<R> {
    pub fn new(max_rolls: Option<usize>, roller: R) -> Self {
        Self {
            max_rolls,
            rolls: 0,
            roller,
        }
    }

    pub fn new_bounded(max_rolls: usize, roller: R) -> Self {
        Self::new(Some(max_rolls), roller)
    }

    pub fn new_unbounded(roller: R) -> Self {
        Self::new(None, roller)
    }

    /// Number of dice rolled through this context so far.
    pub fn rolls(&self) -> usize {
        self.rolls
    }

    fn count_rolls(&mut self, n: usize) -> RResult<()> {
        let rolls = self.rolls.saturating_add(n);
        if self.max_rolls.map_or(false, |max| rolls > max) {
            debug!(rolls, max_rolls = ?self.max_rolls, "roll limit exceeded");
            Err(RollError::TooManyRolls)
        } else {
            self.rolls = rolls;
            Ok(())
        }
    }

    /// Rolls `num` dice, failing before any draw if that would exceed the limit.
    pub fn roll(
        &mut self,
        num: usize,
        faces: NonZeroUInt,
    ) -> RResult<impl Iterator<Item = UInt> + '_> {
        self.count_rolls(num)?;
        let roller = &mut self.roller;
        Ok((0..num).map(move |_| roller.roll(faces)))
    }

    pub fn roll_one(&mut self, faces: NonZeroUInt) -> RResult<UInt> {
        self.count_rolls(1)?;
        Ok(self.roller.roll(faces))
    }

    pub fn eval(&mut self, node: &Node) -> RResult<Evaluation> {
        node.eval(self)
    }
}

impl RollContext<DefaultRoller> {
    pub fn with_limit(max_rolls: Option<usize>) -> Self {
        Self::new(max_rolls, rand::thread_rng())
    }
}

impl RollContext<StdRng> {
    /// A context whose rolls are reproducible for a given `seed`.
    pub fn seeded(seed: u64, max_rolls: Option<usize>) -> Self {
        Self::new(max_rolls, StdRng::seed_from_u64(seed))
    }
}

impl Default for RollContext {
    fn default() -> Self {
        Self::with_limit(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roll::roller::StepRoller;

    fn six() -> NonZeroUInt {
        NonZeroUInt::new(6).unwrap()
    }

    #[test]
    fn test_roll_counts() {
        let mut ctx = RollContext::new_unbounded(StepRoller::new(1, 1));
        let rolls: Vec<_> = ctx.roll(3, six()).unwrap().collect();
        assert_eq!(rolls, [1, 2, 3]);
        assert_eq!(ctx.roll_one(six()), Ok(4));
        assert_eq!(ctx.rolls(), 4);
    }

    #[test]
    fn test_roll_limit() {
        let mut ctx = RollContext::new_bounded(3, StepRoller::new(1, 1));
        assert!(ctx.roll(4, six()).is_err());
        assert_eq!(ctx.rolls(), 0);
        assert_eq!(ctx.roll(3, six()).unwrap().count(), 3);
        assert_eq!(ctx.roll_one(six()), Err(RollError::TooManyRolls));
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let draw = |seed| {
            let mut ctx = RollContext::seeded(seed, None);
            ctx.roll(20, six()).unwrap().collect::<Vec<_>>()
        };
        assert_eq!(draw(42), draw(42));
    }
}
