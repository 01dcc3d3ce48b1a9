//! Grammar module
//!
//! This module contains the parsing rules organized by category:
//! - `literal`: identifiers, numbers and booleans
//! - `expression`: expression forms (if, let, lambdas, application)
//!
//! Top-level bindings are parsed here.

mod expression;
mod literal;

pub use expression::{application, atom, expression, if_expr, lambda, let_expr};
pub use literal::{boolean, ident, number};

use crate::ast::Binding;

use super::combinators::{BoxedParser, expect_def, expect_equals, many};
use super::state::{ParseError, ParseResult, ParseState, Parser};

/// binding := "def" ident "=" expression
pub fn binding() -> BoxedParser<Binding> {
    let name = expect_def() * ident().label("binding name") - expect_equals();

    name + expression() >> |(name, expr)| Binding::new(name, expr)
}

/// program := binding*
pub fn program() -> BoxedParser<Vec<Binding>> {
    many(binding())
}

/// Parse a complete program from the token stream.
///
/// All tokens must be consumed. When input is left over, the error that got
/// furthest into the token stream is reported.
pub fn parse(state: &mut ParseState) -> ParseResult<Vec<Binding>> {
    let bindings = program().parse(state)?;

    if !state.has_next() {
        return Ok(bindings);
    }

    if let Some(furthest) = state.furthest_error() {
        return Err(furthest.clone());
    }

    let err = match state.peek() {
        Some(tok) => ParseError::new("unexpected token")
            .found(tok.describe())
            .at(tok.pos()),
        None => ParseError::new("unexpected end of input"),
    };
    Err(err)
}
