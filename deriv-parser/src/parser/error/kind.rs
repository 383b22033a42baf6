use ariadne::Fmt;
use deriv_attrs::ErrorKind;
use deriv_error::EXPR;

/// The end of the source code was reached unexpectedly.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected end of input",
    labels = [format!("you might need to add another {} here", "expression".fg(EXPR))],
)]
pub struct UnexpectedEof;

/// The end of the source code was expected, but something else was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected end of input",
    labels = [format!("I could not understand the remaining {} here", "expression".fg(EXPR))],
    help = "only one expression can be differentiated at a time",
)]
pub struct ExpectedEof;

/// A parenthesis was not closed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unclosed parenthesis",
    labels = ["this parenthesis is not closed"],
    help = if self.opening {
        "add a closing parenthesis `)` somewhere after this"
    } else {
        "add an opening parenthesis `(` somewhere before this"
    },
)]
pub struct UnclosedParenthesis {
    /// Whether the parenthesis was an opening parenthesis `(`. Otherwise, the parenthesis was a
    /// closing parenthesis `)`.
    pub opening: bool,
}

/// There was nothing inside a pair of parentheses.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing operator inside parenthesis",
    labels = ["add an operator and its operands here"],
    help = format!("for example: {}", "(sin x)".fg(EXPR)),
)]
pub struct EmptyParenthesis;

/// The head of a list was another list instead of an operator.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected operator",
    labels = ["this should be an operator, such as `+` or `sin`"],
)]
pub struct ExpectedOperator;

/// The head of a list is not a recognized operator.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown operator `{}`", self.name),
    labels = ["this operator"],
    help = if self.suggestions.is_empty() {
        "the supported operators are: + - * / ^ sin cos tan exp ln".to_string()
    } else if self.suggestions.len() == 1 {
        format!("did you mean the `{}` operator?", self.suggestions[0].fg(EXPR))
    } else {
        format!(
            "did you mean one of these operators? {}",
            self.suggestions
                .iter()
                .map(|s| format!("`{}`", s.fg(EXPR)))
                .collect::<Vec<_>>()
                .join(", ")
        )
    },
)]
pub struct UnknownOperator {
    /// The tag that was used.
    pub name: String,

    /// Supported operators with a tag similar to the one used.
    pub suggestions: Vec<&'static str>,
}

/// An operator was given the wrong number of operands.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("wrong number of operands for `{}`", self.op),
    labels = [
        format!("this operator takes {} operand{}", self.expected, if self.expected == 1 { "" } else { "s" }),
        format!("but {} {} given here", self.found, if self.found == 1 { "was" } else { "were" }),
    ],
)]
pub struct ArityMismatch {
    /// The operator tag.
    pub op: &'static str,

    /// The number of operands the operator takes.
    pub expected: usize,

    /// The number of operands that were given.
    pub found: usize,
}
