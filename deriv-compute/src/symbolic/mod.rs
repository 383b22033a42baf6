//! Symbolic manipulation of expressions: differentiation and simplification.
//!
//! Both operate on the [`Expr`](deriv_parser::parser::ast::Expr) tree produced by
//! [`deriv_parser`], and both return a new tree instead of modifying their input.
//!
//! ```
//! use deriv_compute::symbolic::{differentiate, simplify};
//! use deriv_parser::parse;
//!
//! let expr = parse("(* x x)").unwrap();
//! let derivative = differentiate(&expr);
//! assert_eq!(derivative.to_string(), "(+ (* x 1) (* 1 x))");
//!
//! let simplified = simplify(&derivative).unwrap();
//! assert_eq!(simplified.to_string(), "(* 2 x)");
//! ```

pub mod derivative;
pub mod simplify;
pub mod step_collector;

pub use derivative::{derivative, differentiate};
pub use simplify::{simplify, simplify_with_steps};
pub use step_collector::StepCollector;
