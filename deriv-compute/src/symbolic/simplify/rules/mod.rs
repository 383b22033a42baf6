//! Implementation of the simplification rules.
//!
//! Each rule in this module is a function that takes the **already simplified** operands of a
//! binary operation, and returns `Some(expr)` with the simplified expression if the rule applies,
//! or `None` if the rule does not apply. The `all` function of each submodule tries the rules of
//! one operator in priority order; the first rule that applies wins.

pub mod add;
pub mod divide;
pub mod multiply;
pub mod power;

use deriv_parser::parser::ast::Expr;

/// If both operands are number literals, combines them with the given function.
///
/// Returns `Some(expr)` with the resulting number literal if both operands are numbers.
pub(crate) fn do_numbers(lhs: &Expr, rhs: &Expr, f: impl Fn(f64, f64) -> f64) -> Option<Expr> {
    Some(Expr::Number(f(lhs.as_number()?, rhs.as_number()?)))
}
