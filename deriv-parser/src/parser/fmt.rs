//! Printing of expressions back into prefix notation.
//!
//! The output of [`Display`](std::fmt::Display) for [`Expr`] can be parsed again to produce an
//! equal expression.

use std::fmt::{Display, Formatter, Result};
use super::{ast::Expr, token::op::{BinOpKind, UnaryOpKind}};

/// Formats a number in its shortest decimal form, so `2.0` is written as `2`, and `2.5` as
/// `2.5`.
///
/// Magnitudes of at least `1e16` or below `1e-4` are written in scientific notation, such as
/// `1e300` or `1.5e-7`.
pub fn fmt_number(f: &mut Formatter, n: f64) -> Result {
    let abs = n.abs();
    if abs.is_finite() && abs != 0.0 && !(1e-4..1e16).contains(&abs) {
        return write!(f, "{:e}", n);
    }

    let s = n.to_string();
    if s.contains('.') {
        write!(f, "{}", s.trim_end_matches('0').trim_end_matches('.'))
    } else {
        write!(f, "{}", s)
    }
}

impl Display for BinOpKind {
    fn fmt(&self, f: &mut Formatter) -> Result {
        f.write_str(self.as_str())
    }
}

impl Display for UnaryOpKind {
    fn fmt(&self, f: &mut Formatter) -> Result {
        f.write_str(self.as_str())
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            Self::Number(n) => fmt_number(f, *n),
            Self::Symbol(sym) => write!(f, "{}", sym),
            Self::Binary(op, lhs, rhs) => write!(f, "({} {} {})", op, lhs, rhs),
            Self::Unary(op, operand) => write!(f, "({} {})", op, operand),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn numbers() {
        assert_eq!(Expr::Number(2.0).to_string(), "2");
        assert_eq!(Expr::Number(2.5).to_string(), "2.5");
        assert_eq!(Expr::Number(-1.0).to_string(), "-1");
        assert_eq!(Expr::Number(100.0).to_string(), "100");
        assert_eq!(Expr::Number(0.1 + 0.2).to_string(), "0.30000000000000004");
        assert_eq!(Expr::Number(f64::INFINITY).to_string(), "inf");
    }

    #[test]
    fn scientific_numbers() {
        assert_eq!(Expr::Number(1e300).to_string(), "1e300");
        assert_eq!(Expr::Number(-2.5e16).to_string(), "-2.5e16");
        assert_eq!(Expr::Number(1e-7).to_string(), "1e-7");
        assert_eq!(Expr::Number(0.0001).to_string(), "0.0001");
        assert_eq!(Expr::Number(1234567890123456.0).to_string(), "1234567890123456");
        assert_eq!(Expr::Number(0.0).to_string(), "0");
    }

    #[test]
    fn nested() {
        let expr = Expr::binary(
            BinOpKind::Mul,
            Expr::Number(2.0),
            Expr::unary(UnaryOpKind::Cos, Expr::symbol("x")),
        );
        assert_eq!(expr.to_string(), "(* 2 (cos x))");
    }
}
