//! Literal parsers: identifiers, numbers and booleans

use crate::lexer::Token;

use crate::parser::combinators::{BoxedParser, token};
use crate::parser::state::{ParseError, ParseState, Parser};

/// Parse an identifier
pub fn ident() -> BoxedParser<String> {
    token(
        |tok| match tok {
            Token::Ident(id) => Some(id.value.clone()),
            _ => None,
        },
        "identifier",
    )
}

/// Parse a number literal
pub fn number() -> BoxedParser<f64> {
    let raw = token(
        |tok| match tok {
            Token::Number(num) => Some((num.value.clone(), num.position.clone())),
            _ => None,
        },
        "number",
    );

    BoxedParser::new(move |state: &mut ParseState| {
        let (value, position) = raw.parse(state)?;
        value.parse::<f64>().map_err(|_| {
            ParseError::new("malformed number")
                .found(value.clone())
                .at(position)
        })
    })
}

/// Parse a boolean literal: "True" | "False"
pub fn boolean() -> BoxedParser<bool> {
    token(
        |tok| match tok {
            Token::True(_) => Some(true),
            Token::False(_) => Some(false),
            _ => None,
        },
        "boolean",
    )
}
