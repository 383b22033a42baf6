use crate::{
    parser::{
        error::{kind, Error},
        token::op::{BinOpKind, Operator, UnaryOpKind},
        Parse,
        Parser,
    },
    tokenizer::TokenKind,
};
use levenshtein::levenshtein;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An expression tree.
///
/// Operations are split into [`Expr::Binary`] and [`Expr::Unary`], so the number of operands is
/// always the one the operator requires.
///
/// The [`PartialEq`] implementation is **structural equality**: two expressions are equal if they
/// have the same shape, the same operators, equal numbers and equal symbol names. It is not
/// mathematical equivalence; `(+ x 1)` and `(+ 1 x)` are different.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// A floating-point literal, such as `2` or `-0.5`.
    Number(f64),

    /// An identifier, such as `x` or `a`.
    Symbol(String),

    /// A binary operation, such as `(+ x 1)`.
    Binary(BinOpKind, Box<Expr>, Box<Expr>),

    /// A unary operation, such as `(sin x)`.
    Unary(UnaryOpKind, Box<Expr>),
}

impl Expr {
    /// Creates a symbol with the given name.
    pub fn symbol(name: impl Into<String>) -> Self {
        Self::Symbol(name.into())
    }

    /// Creates a binary operation.
    pub fn binary(op: BinOpKind, lhs: Expr, rhs: Expr) -> Self {
        Self::Binary(op, Box::new(lhs), Box::new(rhs))
    }

    /// Creates a unary operation.
    pub fn unary(op: UnaryOpKind, operand: Expr) -> Self {
        Self::Unary(op, Box::new(operand))
    }

    /// Returns the value of the expression if it is a number literal.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns true if the expression is the number literal `n`.
    pub fn is_number(&self, n: f64) -> bool {
        self.as_number() == Some(n)
    }

    /// Builds the operation for the given operator, if the number of operands matches its arity.
    fn from_operands(op: Operator, mut operands: Vec<Expr>) -> Option<Self> {
        match op {
            Operator::Binary(kind) if operands.len() == 2 => {
                let rhs = operands.pop()?;
                let lhs = operands.pop()?;
                Some(Self::binary(kind, lhs, rhs))
            },
            Operator::Unary(kind) if operands.len() == 1 => {
                Some(Self::unary(kind, operands.pop()?))
            },
            _ => None,
        }
    }
}

/// Parses a leaf: a number if the lexeme is a valid float literal, a symbol otherwise.
fn parse_atom(lexeme: &str) -> Expr {
    lexeme.parse::<f64>()
        .map(Expr::Number)
        .unwrap_or_else(|_| Expr::symbol(lexeme))
}

/// Parses the contents of a list, starting right after its opening parenthesis.
fn parse_list(input: &mut Parser, open: std::ops::Range<usize>) -> Result<Expr, Error> {
    let head = match input.next_token() {
        Ok(token) => token,
        Err(_) => return Err(Error::new(vec![open], kind::UnclosedParenthesis { opening: true })),
    };

    let op = match head.kind {
        TokenKind::Atom => Operator::from_tag(head.lexeme).ok_or_else(|| {
            let suggestions = Operator::ALL
                .into_iter()
                .map(Operator::as_str)
                .filter(|tag| levenshtein(tag, head.lexeme) < 2)
                .collect();
            Error::new(vec![head.span.clone()], kind::UnknownOperator {
                name: head.lexeme.to_owned(),
                suggestions,
            })
        })?,
        TokenKind::CloseParen => {
            return Err(Error::new(vec![open.start..head.span.end], kind::EmptyParenthesis));
        },
        _ => return Err(Error::new(vec![head.span], kind::ExpectedOperator)),
    };

    let mut operands = Vec::new();
    let close = loop {
        match input.peek_token().map(|token| token.kind) {
            Some(TokenKind::CloseParen) => break input.next_token()?.span,
            Some(_) => operands.push(Expr::parse(input)?),
            None => return Err(Error::new(vec![open], kind::UnclosedParenthesis { opening: true })),
        }
    };

    let found = operands.len();
    Expr::from_operands(op, operands).ok_or_else(|| {
        Error::new(vec![head.span, open.start..close.end], kind::ArityMismatch {
            op: op.as_str(),
            expected: op.arity(),
            found,
        })
    })
}

impl Parse for Expr {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let token = input.next_token()?;
        match token.kind {
            TokenKind::OpenParen => parse_list(input, token.span),
            TokenKind::CloseParen => Err(Error::new(vec![token.span], kind::UnclosedParenthesis { opening: false })),
            _ => Ok(parse_atom(token.lexeme)),
        }
    }
}
