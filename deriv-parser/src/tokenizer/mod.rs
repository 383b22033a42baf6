pub mod token;

use logos::{Lexer, Logos};
pub use token::{Token, TokenKind};

/// Returns an iterator over the token kinds produced by the tokenizer.
pub fn tokenize(input: &str) -> Lexer<TokenKind> {
    TokenKind::lexer(input)
}

/// Returns an owned array containing all of the tokens produced by the tokenizer.
pub fn tokenize_complete(input: &str) -> Box<[Token]> {
    let mut lexer = tokenize(input);
    let mut tokens = Vec::new();

    while let Some(Ok(kind)) = lexer.next() {
        tokens.push(Token {
            span: lexer.span(),
            kind,
            lexeme: lexer.slice(),
        });
    }

    tokens.into_boxed_slice()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Compares the tokens produced by the tokenizer to the raw expected tokens.
    fn compare_tokens<'source, const N: usize>(input: &'source str, expected: [(TokenKind, &'source str); N]) {
        let mut lexer = tokenize(input);

        for (expected_kind, expected_lexeme) in expected.into_iter() {
            assert_eq!(lexer.next(), Some(Ok(expected_kind)));
            assert_eq!(lexer.slice(), expected_lexeme);
        }

        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn basic_expr() {
        compare_tokens(
            "(+ x 1)",
            [
                (TokenKind::OpenParen, "("),
                (TokenKind::Atom, "+"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Atom, "x"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Atom, "1"),
                (TokenKind::CloseParen, ")"),
            ],
        );
    }

    #[test]
    fn atoms_run_until_delimiter() {
        compare_tokens(
            "(^   -2.5e3\t(ln y_1))",
            [
                (TokenKind::OpenParen, "("),
                (TokenKind::Atom, "^"),
                (TokenKind::Whitespace, "   "),
                (TokenKind::Atom, "-2.5e3"),
                (TokenKind::Whitespace, "\t"),
                (TokenKind::OpenParen, "("),
                (TokenKind::Atom, "ln"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Atom, "y_1"),
                (TokenKind::CloseParen, ")"),
                (TokenKind::CloseParen, ")"),
            ],
        );
    }

    #[test]
    fn newlines_are_whitespace() {
        compare_tokens(
            "(sin\n\r\n  x)",
            [
                (TokenKind::OpenParen, "("),
                (TokenKind::Atom, "sin"),
                (TokenKind::Whitespace, "\n\r\n  "),
                (TokenKind::Atom, "x"),
                (TokenKind::CloseParen, ")"),
            ],
        );
    }

    #[test]
    fn complete_spans() {
        let tokens = tokenize_complete("(cos  x)");
        let spans = tokens.iter().map(|t| t.span.clone()).collect::<Vec<_>>();
        assert_eq!(spans, vec![0..1, 1..4, 4..6, 6..7, 7..8]);
    }
}
