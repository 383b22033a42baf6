//! The operators that can appear at the head of a list.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A binary operation, taking exactly two operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinOpKind {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinOpKind {
    /// Returns the tag used to write this operator.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        }
    }
}

/// A unary operation (an elementary function), taking exactly one operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UnaryOpKind {
    Sin,
    Cos,
    Tan,
    Exp,
    Ln,
}

impl UnaryOpKind {
    /// Returns the tag used to write this operator.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Exp => "exp",
            Self::Ln => "ln",
        }
    }
}

/// Any operator, along with the number of operands it takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Binary(BinOpKind),
    Unary(UnaryOpKind),
}

impl Operator {
    /// Every supported operator.
    pub const ALL: [Operator; 10] = [
        Operator::Binary(BinOpKind::Add),
        Operator::Binary(BinOpKind::Sub),
        Operator::Binary(BinOpKind::Mul),
        Operator::Binary(BinOpKind::Div),
        Operator::Binary(BinOpKind::Pow),
        Operator::Unary(UnaryOpKind::Sin),
        Operator::Unary(UnaryOpKind::Cos),
        Operator::Unary(UnaryOpKind::Tan),
        Operator::Unary(UnaryOpKind::Exp),
        Operator::Unary(UnaryOpKind::Ln),
    ];

    /// Looks up the operator written with the given tag. Tags are case-sensitive.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.as_str() == tag)
    }

    /// Returns the tag used to write this operator.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Binary(op) => op.as_str(),
            Self::Unary(op) => op.as_str(),
        }
    }

    /// Returns the number of operands this operator takes.
    pub fn arity(self) -> usize {
        match self {
            Self::Binary(_) => 2,
            Self::Unary(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_tag(op.as_str()), Some(op));
        }
    }

    #[test]
    fn arity_table() {
        assert_eq!(Operator::from_tag("^").map(Operator::arity), Some(2));
        assert_eq!(Operator::from_tag("ln").map(Operator::arity), Some(1));
        assert_eq!(Operator::from_tag("Sin"), None);
        assert_eq!(Operator::from_tag("foo"), None);
    }
}
