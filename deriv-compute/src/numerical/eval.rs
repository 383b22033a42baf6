use crate::error::{kind::UndefinedVariable, Error};
use deriv_parser::parser::{ast::Expr, token::op::{BinOpKind, UnaryOpKind}};
use super::ctxt::Ctxt;

/// Any type that can be evaluated to produce a number.
pub trait Eval {
    /// Evaluate the expression to produce a number, using the given context.
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error>;

    /// Evaluate the expression to produce a number, using the default context.
    fn eval_default(&self) -> Result<f64, Error> {
        self.eval(&Default::default())
    }
}

impl Eval for Expr {
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error> {
        match self {
            Self::Number(n) => Ok(*n),
            Self::Symbol(name) => ctxt.get_var(name).ok_or_else(|| {
                Error::new(Vec::new(), UndefinedVariable { name: name.clone() })
            }),
            Self::Binary(op, lhs, rhs) => {
                let (lhs, rhs) = (lhs.eval(ctxt)?, rhs.eval(ctxt)?);
                Ok(match op {
                    BinOpKind::Add => lhs + rhs,
                    BinOpKind::Sub => lhs - rhs,
                    BinOpKind::Mul => lhs * rhs,
                    BinOpKind::Div => lhs / rhs,
                    BinOpKind::Pow => lhs.powf(rhs),
                })
            },
            Self::Unary(op, operand) => {
                let operand = operand.eval(ctxt)?;
                Ok(match op {
                    UnaryOpKind::Sin => operand.sin(),
                    UnaryOpKind::Cos => operand.cos(),
                    UnaryOpKind::Tan => operand.tan(),
                    UnaryOpKind::Exp => operand.exp(),
                    UnaryOpKind::Ln => operand.ln(),
                })
            },
        }
    }
}
