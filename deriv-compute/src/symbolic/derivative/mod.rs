//! Symbolic differentiation.
//!
//! The rules in this module build the derivative tree directly from the rule table of each
//! operator, without simplifying anything along the way. The resulting tree is usually much
//! larger than it needs to be; pass it to [`simplify`](super::simplify()) to clean it up.

use deriv_parser::parser::{ast::Expr, token::op::BinOpKind};

mod function;

/// Shorthand for building a binary operation.
pub(super) fn bin(op: BinOpKind, lhs: Expr, rhs: Expr) -> Expr {
    Expr::binary(op, lhs, rhs)
}

/// `(f ± g)' = f' ± g'`
fn sum_rule(op: BinOpKind, f: &Expr, g: &Expr, with: &str) -> Expr {
    bin(op, derivative(f, with), derivative(g, with))
}

/// `(f * g)' = f * g' + f' * g`
fn product_rule(f: &Expr, g: &Expr, with: &str) -> Expr {
    bin(
        BinOpKind::Add,
        bin(BinOpKind::Mul, f.clone(), derivative(g, with)),
        bin(BinOpKind::Mul, derivative(f, with), g.clone()),
    )
}

/// `(f / g)' = (f' * g - f * g') / (g * g)`
fn quotient_rule(f: &Expr, g: &Expr, with: &str) -> Expr {
    bin(
        BinOpKind::Div,
        bin(
            BinOpKind::Sub,
            bin(BinOpKind::Mul, derivative(f, with), g.clone()),
            bin(BinOpKind::Mul, f.clone(), derivative(g, with)),
        ),
        bin(BinOpKind::Mul, g.clone(), g.clone()),
    )
}

/// `(f ^ n)' = n * (f ^ (n - 1) * f')`
///
/// The exponent is assumed to be constant with respect to the variable; no `ln(f)` term is added
/// for exponents that depend on it.
fn power_rule(f: &Expr, n: &Expr, with: &str) -> Expr {
    bin(
        BinOpKind::Mul,
        n.clone(),
        bin(
            BinOpKind::Mul,
            bin(BinOpKind::Pow, f.clone(), bin(BinOpKind::Sub, n.clone(), Expr::Number(1.0))),
            derivative(f, with),
        ),
    )
}

/// Computes the derivative of the given expression with respect to the symbol `with`. Every other
/// symbol is treated as a constant.
pub fn derivative(f: &Expr, with: &str) -> Expr {
    match f {
        Expr::Number(_) => Expr::Number(0.0),
        Expr::Symbol(sym) => {
            if sym == with {
                Expr::Number(1.0)
            } else {
                Expr::Number(0.0)
            }
        },
        Expr::Binary(op @ (BinOpKind::Add | BinOpKind::Sub), f, g) => sum_rule(*op, f, g, with),
        Expr::Binary(BinOpKind::Mul, f, g) => product_rule(f, g, with),
        Expr::Binary(BinOpKind::Div, f, g) => quotient_rule(f, g, with),
        Expr::Binary(BinOpKind::Pow, f, n) => power_rule(f, n, with),
        Expr::Unary(func, arg) => function::function_derivative(*func, arg, with),
    }
}

/// Computes the derivative of the given expression with respect to `x`.
pub fn differentiate(f: &Expr) -> Expr {
    derivative(f, "x")
}

#[cfg(test)]
pub mod tests {
    use crate::numerical::{ctxt::Ctxt, eval::Eval};
    use deriv_parser::parse;
    use pretty_assertions::assert_eq;

    use super::*;

    /// Boilerplate helper function for evaluating an expression and substituting in "x"
    fn eval_x(e: &Expr, x: f64) -> f64 {
        let mut context = Ctxt::new();
        context.add_var("x", x);
        context.add_var("a", 3.0);
        e.eval(&context).unwrap()
    }

    // Performs a central finite difference to approximate the derivative of the provided
    // expression
    fn finite_difference(e: &Expr, x: f64) -> f64 {
        const DX: f64 = 0.00001;
        (eval_x(e, x + DX) - eval_x(e, x - DX)) / (2.0 * DX)
    }

    fn test_for_function(function: &'static str, points: impl IntoIterator<Item = f64>) {
        const TOL: f64 = 0.0001;

        let expr = parse(function).unwrap();
        let symbolic = differentiate(&expr);

        for point in points.into_iter() {
            let symbolically_computed = eval_x(&symbolic, point);
            let numerically_computed = finite_difference(&expr, point);

            assert!((symbolically_computed - numerically_computed).abs() < TOL, "For \"{function}\" at x={point}, symbolically computed derivative was {symbolically_computed} but numerically computed derivative was {numerically_computed}, which was out of tolerance {TOL}")
        }
    }

    #[test]
    fn constants() {
        assert_eq!(differentiate(&Expr::Number(5.0)), Expr::Number(0.0));
        assert_eq!(differentiate(&Expr::symbol("x")), Expr::Number(1.0));
        assert_eq!(differentiate(&Expr::symbol("y")), Expr::Number(0.0));
    }

    #[test]
    fn other_variable() {
        let expr = parse("(* x y)").unwrap();
        assert_eq!(derivative(&expr, "y").to_string(), "(+ (* x 1) (* 0 y))");
    }

    #[test]
    fn rule_shapes() {
        let cases = [
            ("(+ x 2)", "(+ 1 0)"),
            ("(- x y)", "(- 1 0)"),
            ("(* x 2)", "(+ (* x 0) (* 1 2))"),
            ("(/ 1 x)", "(/ (- (* 0 x) (* 1 1)) (* x x))"),
            ("(^ x 3)", "(* 3 (* (^ x (- 3 1)) 1))"),
            ("(sin x)", "(* 1 (cos x))"),
            ("(cos x)", "(* 1 (* -1 (sin x)))"),
            ("(tan x)", "(/ 1 (^ (cos x) 2))"),
            ("(exp x)", "(* 1 (exp x))"),
            ("(ln x)", "(/ 1 x)"),
        ];

        for (input, expected) in cases {
            let derivative = differentiate(&parse(input).unwrap());
            assert_eq!(derivative.to_string(), expected, "derivative of {}", input);
        }
    }

    #[test]
    fn power_rule_numerically() {
        test_for_function("(+ (+ (^ x 2) x) 1)", [0., 1., 2., 5., 8.]);
        test_for_function("(^ x 3)", [-2., 0.5, 1., 4.]);
    }

    #[test]
    fn product_quotient_numerically() {
        test_for_function("(* (sin x) (exp x))", [-1., 0., 0.5, 2.]);
        test_for_function("(/ (+ x 1) (- x a))", [-1., 0., 1., 5.]);
    }

    #[test]
    fn chain_rule_numerically() {
        test_for_function("(sin (* 2 x))", [-1., 0., 0.3, 2.]);
        test_for_function("(cos (^ x 2))", [-1., 0., 0.3, 1.2]);
        test_for_function("(tan (/ x 2))", [-1., 0., 0.3, 1.]);
        test_for_function("(ln (+ (* x x) 1))", [-2., 0., 0.5, 3.]);
        test_for_function("(exp (* a x))", [-1., 0., 0.25]);
    }

    #[test]
    fn power_rule_assumes_constant_exponent() {
        // d/dx x^x is not x^x * (ln x + 1); only the power rule term is produced
        let expr = parse("(^ x x)").unwrap();
        assert_eq!(differentiate(&expr).to_string(), "(* x (* (^ x (- x 1)) 1))");
    }
}
