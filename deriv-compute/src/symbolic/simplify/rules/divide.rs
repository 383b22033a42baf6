//! Simplification rules for division.

use deriv_parser::parser::ast::Expr;
use crate::{
    error::{kind::DivisionByZero, Error},
    symbolic::{
        simplify::{rules::do_numbers, step::Step},
        step_collector::StepCollector,
    },
};

/// `a/0` is an error.
///
/// The error has no spans, since simplification does not know where the expression came from.
pub fn divide_zero(rhs: &Expr) -> Result<(), Error> {
    if rhs.is_number(0.0) {
        Err(Error::new(Vec::new(), DivisionByZero))
    } else {
        Ok(())
    }
}

/// `a/1 = a`
pub fn divide_one(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    if rhs.is_number(1.0) {
        step_collector.push(Step::DivideOne);
        Some(lhs.clone())
    } else {
        None
    }
}

/// `3/4 = 0.75`
pub fn fold(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_numbers(lhs, rhs, |a, b| a / b)?;
    step_collector.push(Step::FoldDivide);
    Some(opt)
}

/// `a/a = 1`
pub fn divide_self(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    if lhs == rhs {
        step_collector.push(Step::DivideSelf);
        Some(Expr::Number(1.0))
    } else {
        None
    }
}

/// Applies all division rules. Returns [`Err`] if the denominator is zero.
pub fn all(
    lhs: &Expr,
    rhs: &Expr,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Option<Expr>, Error> {
    divide_zero(rhs)?;
    Ok(divide_one(lhs, rhs, step_collector)
        .or_else(|| fold(lhs, rhs, step_collector))
        .or_else(|| divide_self(lhs, rhs, step_collector)))
}
