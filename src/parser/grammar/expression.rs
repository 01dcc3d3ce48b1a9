//! Expression parsers

use crate::ast::Expr;

use crate::parser::combinators::{
    BoxedParser, expect_backslash, expect_else, expect_equals, expect_if, expect_in, expect_let,
    expect_lparen, expect_rparen, expect_then, many, optional,
};
use crate::parser::state::{ParseState, Parser};

use super::literal::{boolean, ident, number};

/// Defers construction of a recursive rule until it is actually run.
fn lazy<F: Fn() -> BoxedParser<Expr> + 'static>(rule: F) -> BoxedParser<Expr> {
    BoxedParser::new(move |state: &mut ParseState| rule().parse(state))
}

/// atom := ident | number | boolean | "(" expression ")"
pub fn atom() -> BoxedParser<Expr> {
    let var = ident() >> Expr::Var;
    let num = number() >> Expr::Num;
    let boolean = boolean() >> Expr::Bool;
    let parens = expect_lparen() * lazy(expression) - expect_rparen();

    (var | num | boolean | parens).label("expression")
}

/// if := "if" expression "then" expression "else" expression
pub fn if_expr() -> BoxedParser<Expr> {
    let condition = expect_if() * lazy(expression);
    let then_branch = expect_then() * lazy(expression);
    let else_branch = expect_else() * lazy(expression);

    condition + then_branch + else_branch
        >> |((condition, then_branch), else_branch)| Expr::if_(condition, then_branch, else_branch)
}

/// let := "let" ident "=" expression "in" expression
pub fn let_expr() -> BoxedParser<Expr> {
    let name = expect_let() * ident() - expect_equals();
    let definition = lazy(expression) - expect_in();

    name + definition + lazy(expression)
        >> |((name, definition), body)| Expr::let_(name, definition, body)
}

/// lambda := "\" ident expression
pub fn lambda() -> BoxedParser<Expr> {
    expect_backslash() * ident() + lazy(expression) >> |(param, body)| Expr::lambda(param, body)
}

/// application := atom atom* [lambda]
///
/// Application associates to the left; a trailing lambda becomes the last
/// argument, so `f x \y y` is `(f x) (\y. y)`.
pub fn application() -> BoxedParser<Expr> {
    atom() + many(atom()) + optional(lambda())
        >> |((func, mut args), trailing)| {
            args.extend(trailing);
            Expr::apply_all(func, args)
        }
}

/// expression := if | let | lambda | application
pub fn expression() -> BoxedParser<Expr> {
    if_expr() | let_expr() | lambda() | application()
}
