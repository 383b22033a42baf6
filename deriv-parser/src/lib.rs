//! Tokenizer and parser for expressions written in parenthesized prefix notation, such as
//! `(+ x (* 2 (sin x)))`.
//!
//! The entry point is [`parse`], or [`Parser`] for finer control:
//!
//! ```
//! use deriv_parser::parser::{ast::Expr, token::op::BinOpKind, Parser};
//!
//! let mut parser = Parser::new("(* 2 x)");
//! let expr = parser.try_parse_full::<Expr>().unwrap();
//!
//! assert_eq!(expr, Expr::binary(BinOpKind::Mul, Expr::Number(2.0), Expr::symbol("x")));
//! assert_eq!(expr.to_string(), "(* 2 x)");
//! ```

pub mod parser;
pub mod tokenizer;

pub use parser::parse;
