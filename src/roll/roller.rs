use crate::common::{NonZeroUInt, UInt};
use rand::Rng;

/// A source of uniformly distributed integers.
pub trait Roller {
    /// Returns a value in `min..=max`. Callers guarantee `min <= max`.
    fn uniform(&mut self, min: UInt, max: UInt) -> UInt;

    fn roll(&mut self, faces: NonZeroUInt) -> UInt {
        self.uniform(1, faces.get())
    }
}

impl<R: Rng> Roller for R {
    fn uniform(&mut self, min: UInt, max: UInt) -> UInt {
        self.gen_range(min..=max)
    }
}

#[cfg(test)]
pub(crate) use step::StepRoller;


#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_rng_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let four = NonZeroUInt::new(4).unwrap();
        for _ in 0..1000 {
            assert!((1..=4).contains(&rng.roll(four)));
            assert!((3..=5).contains(&rng.uniform(3, 5)));
        }
        assert_eq!(rng.roll(NonZeroUInt::new(1).unwrap()), 1);
    }
}
