//! Simplification rules for power expressions.

use deriv_parser::parser::{ast::Expr, token::op::BinOpKind};
use crate::symbolic::{
    simplify::{rules::do_numbers, step::Step},
    step_collector::StepCollector,
};

/// `a^0 = 1`
///
/// `0^0` is defined as `1` by this rule.
pub fn power_zero(_: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    if rhs.is_number(0.0) {
        step_collector.push(Step::PowerZero);
        Some(Expr::Number(1.0))
    } else {
        None
    }
}

/// `a^1 = a`
pub fn power_one(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    if rhs.is_number(1.0) {
        step_collector.push(Step::PowerOne);
        Some(lhs.clone())
    } else {
        None
    }
}

/// `2^3 = 8`
///
/// Negative bases with fractional exponents produce `NaN`, as [`f64::powf`] does.
pub fn fold(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_numbers(lhs, rhs, f64::powf)?;
    step_collector.push(Step::FoldPower);
    Some(opt)
}

/// Applies all power rules.
pub fn all(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    power_zero(lhs, rhs, step_collector)
        .or_else(|| power_one(lhs, rhs, step_collector))
        .or_else(|| fold(lhs, rhs, step_collector))
}

/// Builds the simplified power of two already simplified operands.
pub(crate) fn power(lhs: Expr, rhs: Expr, step_collector: &mut dyn StepCollector<Step>) -> Expr {
    all(&lhs, &rhs, step_collector)
        .unwrap_or_else(|| Expr::binary(BinOpKind::Pow, lhs, rhs))
}
