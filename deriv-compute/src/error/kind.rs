use ariadne::Fmt;
use deriv_attrs::ErrorKind;
use deriv_error::EXPR;

/// Simplification produced a division whose denominator is the literal `0`.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "division by zero",
    labels = ["the derivative of this expression divides by zero"],
    help = format!("the denominator of a {} simplified to {}", "`/`".fg(EXPR), "0".fg(EXPR)),
)]
pub struct DivisionByZero;

/// The variable has no value in the evaluation context.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is not defined", self.name),
    labels = ["this expression"],
    help = format!("give {} a value in the context before evaluating", (&self.name).fg(EXPR)),
)]
pub struct UndefinedVariable {
    /// The name of the variable that was undefined.
    pub name: String,
}
