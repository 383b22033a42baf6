//! Numerical evaluation of expressions, using `f64` arithmetic.
//!
//! This is mainly useful to check symbolic results: a derivative computed by
//! [`derivative`](crate::symbolic::derivative()) can be compared against a finite difference of
//! the original expression.

pub mod ctxt;
pub mod eval;

pub use ctxt::Ctxt;
pub use eval::Eval;
