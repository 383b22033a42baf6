pub mod ast;
pub mod error;
pub mod fmt;
pub mod token;

use ast::Expr;
use deriv_error::ErrorKind;
use error::{kind, Error};
use super::tokenizer::{tokenize_complete, Token, TokenKind};
use std::ops::Range;

/// Parses the given source into an [`Expr`]. The whole source must be a single expression.
pub fn parse(source: &str) -> Result<Expr, Error> {
    Parser::new(source).try_parse_full()
}

/// A high-level parser for prefix expressions. This is the type to use to parse an arbitrary piece
/// of source into an expression tree.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The tokens that this parser is currently parsing.
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    pub fn new(source: &'source str) -> Self {
        Self {
            tokens: tokenize_complete(source),
            cursor: 0,
        }
    }

    /// Creates an error that points at the current token, or the end of the source code if the
    /// cursor is at the end of the stream.
    pub fn error(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new(vec![self.span()], kind)
    }

    /// Returns a span pointing at the end of the source code.
    pub fn eof_span(&self) -> Range<usize> {
        self.tokens.last().map_or(0..0, |token| token.span.end..token.span.end)
    }

    /// Returns the span of the current token, or the end of the source code if the cursor is at
    /// the end of the stream.
    pub fn span(&self) -> Range<usize> {
        self.tokens
            .get(self.cursor)
            .map_or(self.eof_span(), |token| token.span.clone())
    }

    /// Advances the cursor past any whitespace tokens.
    fn skip_whitespace(&mut self) {
        while self.tokens.get(self.cursor).is_some_and(Token::is_whitespace) {
            self.cursor += 1;
        }
    }

    /// Returns the next non-whitespace token without consuming it. Returns [`None`] if there are
    /// no more tokens.
    pub fn peek_token(&self) -> Option<&Token<'source>> {
        self.tokens[self.cursor.min(self.tokens.len())..]
            .iter()
            .find(|token| !token.is_whitespace())
    }

    /// Returns the next token to be parsed, then advances the cursor. Whitespace tokens are
    /// skipped.
    ///
    /// Returns an EOF error if there are no more tokens.
    pub fn next_token(&mut self) -> Result<Token<'source>, Error> {
        self.skip_whitespace();
        match self.tokens.get(self.cursor) {
            Some(token) => {
                self.cursor += 1;
                // cloning is cheap: only Range<_> is cloned
                Ok(token.clone())
            },
            None => Err(self.error(kind::UnexpectedEof)),
        }
    }

    /// Attempts to parse a value from the given stream of tokens. All the tokens must be consumed
    /// by the parser; if not, an error is returned.
    pub fn try_parse_full<T: Parse>(&mut self) -> Result<T, Error> {
        let value = T::parse(self)?;
        self.skip_whitespace();
        match self.tokens.get(self.cursor) {
            None => Ok(value),
            Some(token) if token.kind == TokenKind::CloseParen => {
                Err(self.error(kind::UnclosedParenthesis { opening: false }))
            },
            Some(token) => {
                let span = token.span.start..self.eof_span().end;
                Err(Error::new(vec![span], kind::ExpectedEof))
            },
        }
    }
}

/// Any type that can be parsed from a source of tokens.
pub trait Parse: Sized {
    /// Parses a value from the given stream of tokens, advancing the stream past the consumed
    /// tokens if parsing is successful.
    fn parse(input: &mut Parser) -> Result<Self, Error>;
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    use token::op::{BinOpKind, UnaryOpKind};

    /// Parses the source, expecting it to fail, and returns the error.
    fn parse_err(source: &str) -> Error {
        match parse(source) {
            Ok(expr) => panic!("expected `{}` to fail to parse, got {:?}", source, expr),
            Err(err) => err,
        }
    }

    #[test]
    fn literal_int() {
        assert_eq!(parse("16").unwrap(), Expr::Number(16.0));
    }

    #[test]
    fn literal_float() {
        assert_eq!(parse("3.14").unwrap(), Expr::Number(3.14));
        assert_eq!(parse("-2.5e3").unwrap(), Expr::Number(-2500.0));
        assert_eq!(parse(".5").unwrap(), Expr::Number(0.5));
    }

    #[test]
    fn literal_extreme_floats() {
        assert_eq!(parse("1e308").unwrap(), Expr::Number(1e308));
        assert_eq!(parse("inf").unwrap(), Expr::Number(f64::INFINITY));
        assert!(parse("NaN").unwrap().as_number().is_some_and(f64::is_nan));
    }

    #[test]
    fn literal_symbol() {
        assert_eq!(parse("x").unwrap(), Expr::symbol("x"));
        assert_eq!(parse("  y_1 ").unwrap(), Expr::symbol("y_1"));
        assert_eq!(parse("1.2.3").unwrap(), Expr::symbol("1.2.3"));
    }

    #[test]
    fn binary() {
        assert_eq!(parse("(+ x 1)").unwrap(), Expr::binary(
            BinOpKind::Add,
            Expr::symbol("x"),
            Expr::Number(1.0),
        ));
    }

    #[test]
    fn nested() {
        assert_eq!(parse("(^ (sin x) (- y 2))").unwrap(), Expr::binary(
            BinOpKind::Pow,
            Expr::unary(UnaryOpKind::Sin, Expr::symbol("x")),
            Expr::binary(BinOpKind::Sub, Expr::symbol("y"), Expr::Number(2.0)),
        ));
    }

    #[test]
    fn irregular_whitespace() {
        assert_eq!(
            parse("\n( *\t( ln x )x\r\n)  ").unwrap(),
            parse("(* (ln x) x)").unwrap(),
        );
    }

    #[test]
    fn round_trip() {
        for source in [
            "x",
            "2.5",
            "(+ x (+ x x))",
            "(/ (- (* 1 x) (* x 1)) (* x x))",
            "(* -1 (sin (exp (ln (tan (cos y))))))",
            "(^ a b)",
            "(* 1e300 (^ x 1e-7))",
        ] {
            assert_eq!(parse(source).unwrap().to_string(), source);
        }
    }

    #[test]
    fn empty_input() {
        let err = parse_err("");
        assert!(err.is::<kind::UnexpectedEof>());
        assert_eq!(err.spans, vec![0..0]);

        assert!(parse_err("   ").is::<kind::UnexpectedEof>());
    }

    #[test]
    fn unclosed_paren() {
        let err = parse_err("(+ x (sin x)");
        assert_eq!(
            err.downcast_ref::<kind::UnclosedParenthesis>(),
            Some(&kind::UnclosedParenthesis { opening: true }),
        );
        assert_eq!(err.spans, vec![0..1]);

        assert!(parse_err("(").is::<kind::UnclosedParenthesis>());
    }

    #[test]
    fn extra_close_paren() {
        let err = parse_err("(+ x 1))");
        assert_eq!(
            err.downcast_ref::<kind::UnclosedParenthesis>(),
            Some(&kind::UnclosedParenthesis { opening: false }),
        );
        assert_eq!(err.spans, vec![7..8]);

        assert!(parse_err(")").is::<kind::UnclosedParenthesis>());
    }

    #[test]
    fn empty_paren() {
        let err = parse_err("(+ x ( ))");
        assert!(err.is::<kind::EmptyParenthesis>());
        assert_eq!(err.spans, vec![5..8]);
    }

    #[test]
    fn list_head_is_list() {
        let err = parse_err("((+ 1 2) x)");
        assert!(err.is::<kind::ExpectedOperator>());
        assert!(!err.is::<kind::UnknownOperator>());
        assert_eq!(err.spans, vec![1..2]);
    }

    #[test]
    fn trailing_expression() {
        let err = parse_err("(sin x) y");
        assert!(err.is::<kind::ExpectedEof>());
        assert_eq!(err.spans, vec![8..9]);
    }

    #[test]
    fn unknown_operator() {
        let err = parse_err("(foo x)");
        assert_eq!(
            err.downcast_ref::<kind::UnknownOperator>(),
            Some(&kind::UnknownOperator { name: "foo".to_string(), suggestions: vec![] }),
        );
        assert_eq!(err.spans, vec![1..4]);
    }

    #[test]
    fn unknown_operator_suggestion() {
        let err = parse_err("(sinn x)");
        let kind = err.downcast_ref::<kind::UnknownOperator>().unwrap();
        assert_eq!(kind.suggestions, vec!["sin"]);

        // tags are case-sensitive
        assert!(parse_err("(SIN x)").is::<kind::UnknownOperator>());
        assert!(parse_err("(2 x)").is::<kind::UnknownOperator>());
    }

    #[test]
    fn arity_mismatch() {
        let err = parse_err("(+ x)");
        assert_eq!(
            err.downcast_ref::<kind::ArityMismatch>(),
            Some(&kind::ArityMismatch { op: "+", expected: 2, found: 1 }),
        );
        assert_eq!(err.spans, vec![1..2, 0..5]);

        let err = parse_err("(sin x y)");
        assert_eq!(
            err.downcast_ref::<kind::ArityMismatch>(),
            Some(&kind::ArityMismatch { op: "sin", expected: 1, found: 2 }),
        );

        assert!(parse_err("(* 1 2 3)").is::<kind::ArityMismatch>());
        assert!(parse_err("(ln)").is::<kind::ArityMismatch>());
    }
}
