use crate::common::*;
use crate::roll::Eval;
use std::fmt;

/// A parsed dice expression. Every node owns its children.
#[derive(Debug, Clone, Eq, PartialEq)]
#[enum_dispatch::enum_dispatch(Eval)]
pub enum Node {
    Integer(Literal),
    ShortRoll(ShortRoll),
    LongRoll(LongRoll),
    Binary(Binary),
}

impl Node {
    pub fn integer(value: UInt) -> Self {
        Literal(value).into()
    }

    pub fn short_roll(faces: UInt) -> Self {
        ShortRoll { faces }.into()
    }

    pub fn long_roll(die: UInt, faces: UInt, keep: Option<Keep>) -> Self {
        LongRoll { die, faces, keep }.into()
    }

    pub fn binary(left: Node, op: BinaryOperator, right: Node) -> Self {
        Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
        .into()
    }

    fn precedence(&self) -> Option<u8> {
        match self {
            Self::Binary(bin) => Some(bin.op.precedence()),
            _ => None,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Literal(pub UInt);

/// `dN`: a single die with `faces` sides.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ShortRoll {
    pub faces: UInt,
}

/// `NdM`, optionally followed by `hK` or `lK`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct LongRoll {
    pub die: UInt,
    pub faces: UInt,
    pub keep: Option<Keep>,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Keep {
    Highest(UInt),
    Lowest(UInt),
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Binary {
    pub left: Box<Node>,
    pub op: BinaryOperator,
    pub right: Box<Node>,
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(x) => fmt::Display::fmt(x, f),
            Self::ShortRoll(x) => fmt::Display::fmt(x, f),
            Self::LongRoll(x) => fmt::Display::fmt(x, f),
            Self::Binary(x) => fmt::Display::fmt(x, f),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Display for ShortRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "d{}", self.faces)
    }
}

impl fmt::Display for LongRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.die, self.faces)?;
        match self.keep {
            Some(Keep::Highest(n)) => write!(f, "h{}", n),
            Some(Keep::Lowest(n)) => write!(f, "l{}", n),
            None => Ok(()),
        }
    }
}

impl fmt::Display for Binary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prec = self.op.precedence();

        // Operators are left-associative, so an equal-precedence child only
        // needs parentheses on the right.
        if self.left.precedence().map_or(false, |p| p < prec) {
            write!(f, "({})", self.left)?;
        } else {
            write!(f, "{}", self.left)?;
        }

        write!(f, " {} ", self.op)?;

        if self.right.precedence().map_or(false, |p| p <= prec) {
            write!(f, "({})", self.right)
        } else {
            write!(f, "{}", self.right)
        }
    }
}
