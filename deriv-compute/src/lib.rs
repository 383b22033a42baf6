//! Symbolic differentiation of prefix expressions.
//!
//! The [`diff`] function is the main entry point of this crate. It parses an expression written in
//! parenthesized prefix notation, differentiates it with respect to `x`, simplifies the result,
//! and returns the simplified derivative in the same notation:
//!
//! ```
//! use deriv_compute::diff;
//!
//! assert_eq!(diff("(^ x 2)").unwrap(), "(* 2 x)");
//! assert_eq!(diff("(sin x)").unwrap(), "(cos x)");
//! ```
//!
//! Each stage of the pipeline is also available on its own: see the [`symbolic`] module for
//! differentiation and simplification, and the [`numerical`] module to evaluate an expression to a
//! number.

pub mod error;
pub mod numerical;
pub mod symbolic;

use deriv_parser::parse;
use error::Error;
use log::debug;

/// Differentiates the given expression with respect to `x`, returning the simplified derivative
/// as a string.
///
/// Fails with a syntax error if the input cannot be parsed, with an
/// [`UnknownOperator`](deriv_parser::parser::error::kind::UnknownOperator) error if an operation
/// uses an unrecognized operator, or with a [`DivisionByZero`](error::kind::DivisionByZero)
/// error if the simplified derivative divides by zero. Errors raised after parsing point to the
/// whole input.
pub fn diff(input: &str) -> Result<String, Error> {
    let expr = parse(input)?;
    debug!("parsed: {}", expr);

    let derivative = symbolic::differentiate(&expr);
    debug!("derivative: {}", derivative);

    let simplified = symbolic::simplify(&derivative)
        .map_err(|err| err.with_spans(vec![0..input.len()]))?;
    debug!("simplified: {}", simplified);

    Ok(simplified.to_string())
}
