pub mod expr;

pub use expr::Expr;
