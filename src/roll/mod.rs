mod ctx;
mod error;
mod eval;
mod roller;

type RResult<T> = Result<T, RollError>;

pub use ctx::{DefaultRoller, RollContext};
pub use error::RollError;
pub use eval::{Eval, Evaluation};
pub use roller::Roller;
