//! Module to simplify expressions.
//!
//! This module provides the [`simplify`] function, which rewrites an expression into a smaller,
//! equivalent one. Operands are simplified first, then the rules of the operator (see [`rules`])
//! are applied once to the node. The rules only rely on **structural** equality of operands, and
//! fold operations on number literals using `f64` arithmetic.
//!
//! Simplification is idempotent: simplifying an already simplified expression returns it
//! unchanged.

pub mod rules;
pub mod step;

use crate::error::Error;
use deriv_parser::parser::{ast::Expr, token::op::BinOpKind};
use log::trace;
use step::Step;
use super::step_collector::StepCollector;

/// Applies the rules of `op` to a binary operation whose operands are already simplified.
fn simplify_binary(
    op: BinOpKind,
    lhs: Expr,
    rhs: Expr,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Expr, Error> {
    let rewritten = match op {
        BinOpKind::Add | BinOpKind::Sub => rules::add::all(op, &lhs, &rhs, step_collector),
        BinOpKind::Mul => rules::multiply::all(&lhs, &rhs, step_collector),
        BinOpKind::Div => rules::divide::all(&lhs, &rhs, step_collector)?,
        BinOpKind::Pow => rules::power::all(&lhs, &rhs, step_collector),
    };

    match rewritten {
        Some(expr) => {
            trace!("({} {} {}) => {}", op, lhs, rhs, expr);
            Ok(expr)
        },
        None => Ok(Expr::binary(op, lhs, rhs)),
    }
}

/// Base implementation of the simplification algorithm.
fn inner_simplify(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Result<Expr, Error> {
    match expr {
        Expr::Number(_) | Expr::Symbol(_) => Ok(expr.clone()),
        Expr::Unary(op, operand) => Ok(Expr::unary(*op, inner_simplify(operand, step_collector)?)),
        Expr::Binary(op, lhs, rhs) => {
            let lhs = inner_simplify(lhs, step_collector)?;
            let rhs = inner_simplify(rhs, step_collector)?;
            simplify_binary(*op, lhs, rhs, step_collector)
        },
    }
}

/// Simplify the given expression.
///
/// Returns [`Err`] with a [`DivisionByZero`](crate::error::kind::DivisionByZero) error if the
/// denominator of a division simplifies to `0`.
pub fn simplify(expr: &Expr) -> Result<Expr, Error> {
    inner_simplify(expr, &mut ())
}

/// Simplify the given expression. The steps taken by the simplifier will also be collected and
/// returned, in the order they were applied. This is useful for debugging, and also for
/// displaying the steps taken to the user.
pub fn simplify_with_steps(expr: &Expr) -> Result<(Expr, Vec<Step>), Error> {
    let mut steps = Vec::new();
    let expr = inner_simplify(expr, &mut steps)?;
    Ok((expr, steps))
}
