//! Symbolic derivatives of the elementary functions, with the chain rule applied.

use deriv_parser::parser::{ast::Expr, token::op::{BinOpKind, UnaryOpKind}};

use super::{bin, derivative};

/// Computes the derivative of `func(arg)` with respect to `with`, applying the chain rule.
pub(super) fn function_derivative(func: UnaryOpKind, arg: &Expr, with: &str) -> Expr {
    let inner = derivative(arg, with);
    let call = |func| Expr::unary(func, arg.clone());

    match func {
        // sin(f)' = f' * cos(f)
        UnaryOpKind::Sin => bin(BinOpKind::Mul, inner, call(UnaryOpKind::Cos)),
        // cos(f)' = f' * (-1 * sin(f))
        UnaryOpKind::Cos => bin(
            BinOpKind::Mul,
            inner,
            bin(BinOpKind::Mul, Expr::Number(-1.0), call(UnaryOpKind::Sin)),
        ),
        // tan(f)' = f' / cos(f)^2
        UnaryOpKind::Tan => bin(
            BinOpKind::Div,
            inner,
            bin(BinOpKind::Pow, call(UnaryOpKind::Cos), Expr::Number(2.0)),
        ),
        // exp(f)' = f' * exp(f)
        UnaryOpKind::Exp => bin(BinOpKind::Mul, inner, call(UnaryOpKind::Exp)),
        // ln(f)' = f' / f
        UnaryOpKind::Ln => bin(BinOpKind::Div, inner, arg.clone()),
    }
}
