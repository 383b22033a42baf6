//! Simplification rules for addition and subtraction.

use deriv_parser::parser::{ast::Expr, token::op::BinOpKind};
use crate::symbolic::{
    simplify::{rules::{do_numbers, multiply::multiply}, step::Step},
    step_collector::StepCollector,
};

/// `a+a = 2*a`
/// `a-a = 0`
///
/// `2*a` is simplified further.
pub fn combine_self(
    op: BinOpKind,
    lhs: &Expr,
    rhs: &Expr,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<Expr> {
    if lhs != rhs {
        return None;
    }

    if op == BinOpKind::Sub {
        step_collector.push(Step::SubtractSelf);
        Some(Expr::Number(0.0))
    } else {
        step_collector.push(Step::AddSelf);
        Some(multiply(Expr::Number(2.0), lhs.clone(), step_collector))
    }
}

/// `0+a = a`
/// `0-a = -1*a`
///
/// `-1*a` is simplified further.
pub fn zero_left(
    op: BinOpKind,
    lhs: &Expr,
    rhs: &Expr,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<Expr> {
    if !lhs.is_number(0.0) {
        return None;
    }

    if op == BinOpKind::Sub {
        step_collector.push(Step::SubtractFromZero);
        Some(multiply(Expr::Number(-1.0), rhs.clone(), step_collector))
    } else {
        step_collector.push(Step::AddZero);
        Some(rhs.clone())
    }
}

/// `a+0 = a`
/// `a-0 = a`
pub fn zero_right(
    op: BinOpKind,
    lhs: &Expr,
    rhs: &Expr,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<Expr> {
    if !rhs.is_number(0.0) {
        return None;
    }

    step_collector.push(if op == BinOpKind::Sub { Step::SubtractZero } else { Step::AddZero });
    Some(lhs.clone())
}

/// `2+3 = 5`
/// `2-3 = -1`
pub fn fold(
    op: BinOpKind,
    lhs: &Expr,
    rhs: &Expr,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<Expr> {
    let opt = if op == BinOpKind::Sub {
        do_numbers(lhs, rhs, |a, b| a - b)
    } else {
        do_numbers(lhs, rhs, |a, b| a + b)
    }?;

    step_collector.push(if op == BinOpKind::Sub { Step::FoldSubtract } else { Step::FoldAdd });
    Some(opt)
}

/// Applies all addition / subtraction rules. `op` must be [`BinOpKind::Add`] or
/// [`BinOpKind::Sub`].
pub fn all(
    op: BinOpKind,
    lhs: &Expr,
    rhs: &Expr,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<Expr> {
    combine_self(op, lhs, rhs, step_collector)
        .or_else(|| zero_left(op, lhs, rhs, step_collector))
        .or_else(|| zero_right(op, lhs, rhs, step_collector))
        .or_else(|| fold(op, lhs, rhs, step_collector))
}
