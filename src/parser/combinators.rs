use std::ops::{Add, BitOr, Mul, Shr, Sub};
use std::rc::Rc;

use crate::lexer::Token;

use super::state::{ParseError, ParseResult, ParseState, Parser};

type ParserFn<T> = Rc<dyn Fn(&mut ParseState) -> ParseResult<T>>;

/// A type-erased, cheaply clonable parser.
///
/// Parsers compose with operators:
///
/// ```text
/// a + b     both in sequence, yielding (A, B)
/// a - b     both in sequence, keeping A
/// a * b     both in sequence, keeping B
/// a | b     a, or b from the same position if a fails
/// a >> f    a, with its result passed through f
/// ```
pub struct BoxedParser<T> {
    run: ParserFn<T>,
}

impl<T> Clone for BoxedParser<T> {
    fn clone(&self) -> Self {
        BoxedParser {
            run: Rc::clone(&self.run),
        }
    }
}

impl<T> Parser<T> for BoxedParser<T> {
    fn parse(&self, state: &mut ParseState) -> ParseResult<T> {
        (self.run)(state)
    }
}

impl<T: 'static> BoxedParser<T> {
    pub fn new<P: Parser<T> + 'static>(parser: P) -> Self {
        BoxedParser {
            run: Rc::new(move |state| parser.parse(state)),
        }
    }

    /// On failure, report `name` as the only expected item.
    pub fn label(self, name: &'static str) -> BoxedParser<T> {
        BoxedParser::new(move |state: &mut ParseState| {
            self.parse(state).map_err(|mut err| {
                err.expected = vec![name.to_string()];
                state.record_error(err.clone());
                err
            })
        })
    }
}

impl<T: 'static, U: 'static> Add<BoxedParser<U>> for BoxedParser<T> {
    type Output = BoxedParser<(T, U)>;

    fn add(self, rhs: BoxedParser<U>) -> Self::Output {
        BoxedParser::new(move |state: &mut ParseState| {
            let left = self.parse(state)?;
            let right = rhs.parse(state)?;
            Ok((left, right))
        })
    }
}

impl<T: 'static, U: 'static> Sub<BoxedParser<U>> for BoxedParser<T> {
    type Output = BoxedParser<T>;

    fn sub(self, rhs: BoxedParser<U>) -> Self::Output {
        (self + rhs) >> |(left, _)| left
    }
}

impl<T: 'static, U: 'static> Mul<BoxedParser<U>> for BoxedParser<T> {
    type Output = BoxedParser<U>;

    fn mul(self, rhs: BoxedParser<U>) -> Self::Output {
        (self + rhs) >> |(_, right)| right
    }
}

impl<T: 'static> BitOr<BoxedParser<T>> for BoxedParser<T> {
    type Output = BoxedParser<T>;

    fn bitor(self, rhs: BoxedParser<T>) -> Self::Output {
        BoxedParser::new(move |state: &mut ParseState| {
            let start = state.position();
            self.parse(state).or_else(|_| {
                state.restore(start);
                rhs.parse(state)
            })
        })
    }
}

impl<T: 'static, U: 'static, F: Fn(T) -> U + 'static> Shr<F> for BoxedParser<T> {
    type Output = BoxedParser<U>;

    fn shr(self, f: F) -> Self::Output {
        BoxedParser::new(move |state: &mut ParseState| self.parse(state).map(&f))
    }
}

// === Primitive Parsers ===

fn unexpected(state: &mut ParseState, expected: &str) -> ParseError {
    let err = match state.peek() {
        Some(tok) => ParseError::new("unexpected token")
            .expected(expected)
            .found(tok.describe())
            .at(tok.pos()),
        None => ParseError::new("unexpected end of input").expected(expected),
    };
    state.record_error(err.clone());
    err
}

/// Consume the next token if `select` accepts it, producing its payload.
pub fn token<T: 'static, F: Fn(&Token) -> Option<T> + 'static>(
    select: F,
    expected: &'static str,
) -> BoxedParser<T> {
    BoxedParser::new(move |state: &mut ParseState| {
        match state.peek().and_then(|tok| select(tok)) {
            Some(value) => {
                state.advance();
                Ok(value)
            }
            None => Err(unexpected(state, expected)),
        }
    })
}

fn keyword<F: Fn(&Token) -> bool + 'static>(
    predicate: F,
    expected: &'static str,
) -> BoxedParser<()> {
    token(move |tok| predicate(tok).then_some(()), expected)
}

pub fn expect_def() -> BoxedParser<()> {
    keyword(|t| matches!(t, Token::Def(_)), "'def'")
}

pub fn expect_let() -> BoxedParser<()> {
    keyword(|t| matches!(t, Token::Let(_)), "'let'")
}

pub fn expect_in() -> BoxedParser<()> {
    keyword(|t| matches!(t, Token::In(_)), "'in'")
}

pub fn expect_if() -> BoxedParser<()> {
    keyword(|t| matches!(t, Token::If(_)), "'if'")
}

pub fn expect_then() -> BoxedParser<()> {
    keyword(|t| matches!(t, Token::Then(_)), "'then'")
}

pub fn expect_else() -> BoxedParser<()> {
    keyword(|t| matches!(t, Token::Else(_)), "'else'")
}

pub fn expect_equals() -> BoxedParser<()> {
    keyword(|t| matches!(t, Token::Equals(_)), "'='")
}

pub fn expect_backslash() -> BoxedParser<()> {
    keyword(|t| matches!(t, Token::Backslash(_)), "'\\'")
}

pub fn expect_lparen() -> BoxedParser<()> {
    keyword(|t| matches!(t, Token::LParen(_)), "'('")
}

pub fn expect_rparen() -> BoxedParser<()> {
    keyword(|t| matches!(t, Token::RParen(_)), "')'")
}

/// Run `parser`, rewinding the state if it fails.
fn attempt<T>(parser: &BoxedParser<T>, state: &mut ParseState) -> Option<T> {
    let start = state.position();
    parser.parse(state).map_err(|_| state.restore(start)).ok()
}

/// Zero or more repetitions
pub fn many<T: 'static>(parser: BoxedParser<T>) -> BoxedParser<Vec<T>> {
    BoxedParser::new(move |state: &mut ParseState| {
        let mut items = Vec::new();
        while let Some(item) = attempt(&parser, state) {
            items.push(item);
        }
        Ok(items)
    })
}

/// Zero or one occurrence
pub fn optional<T: 'static>(parser: BoxedParser<T>) -> BoxedParser<Option<T>> {
    BoxedParser::new(move |state: &mut ParseState| Ok(attempt(&parser, state)))
}
