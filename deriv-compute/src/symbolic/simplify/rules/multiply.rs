//! Simplification rules for multiplication.

use deriv_parser::parser::{ast::Expr, token::op::BinOpKind};
use crate::symbolic::{
    simplify::{rules::{do_numbers, power::power}, step::Step},
    step_collector::StepCollector,
};

/// `0*a = 0`
/// `a*0 = 0`
pub fn multiply_zero(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    if lhs.is_number(0.0) || rhs.is_number(0.0) {
        step_collector.push(Step::MultiplyZero);
        Some(Expr::Number(0.0))
    } else {
        None
    }
}

/// `1*a = a`
/// `a*1 = a`
pub fn multiply_one(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = if lhs.is_number(1.0) {
        rhs.clone()
    } else if rhs.is_number(1.0) {
        lhs.clone()
    } else {
        return None;
    };

    step_collector.push(Step::MultiplyOne);
    Some(opt)
}

/// `2*3 = 6`
pub fn fold(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_numbers(lhs, rhs, |a, b| a * b)?;
    step_collector.push(Step::FoldMultiply);
    Some(opt)
}

/// `a*a = a^2`
///
/// `a^2` is simplified further.
pub fn multiply_self(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    if lhs != rhs {
        return None;
    }

    step_collector.push(Step::MultiplySelf);
    Some(power(lhs.clone(), Expr::Number(2.0), step_collector))
}

/// Applies all multiplication rules.
pub fn all(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    multiply_zero(lhs, rhs, step_collector)
        .or_else(|| multiply_one(lhs, rhs, step_collector))
        .or_else(|| fold(lhs, rhs, step_collector))
        .or_else(|| multiply_self(lhs, rhs, step_collector))
}

/// Builds the simplified product of two already simplified operands.
pub(crate) fn multiply(lhs: Expr, rhs: Expr, step_collector: &mut dyn StepCollector<Step>) -> Expr {
    all(&lhs, &rhs, step_collector)
        .unwrap_or_else(|| Expr::binary(BinOpKind::Mul, lhs, rhs))
}
