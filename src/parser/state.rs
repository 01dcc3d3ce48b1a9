use std::fmt;

use lachs::Span;

use crate::lexer::Token;

#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub message: String,
    pub expected: Vec<String>,
    pub found: Option<String>,
    pub span: Option<Span>,
}

impl ParseError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
            expected: Vec::new(),
            found: None,
            span: None,
        }
    }

    pub fn expected(mut self, item: impl Into<String>) -> Self {
        self.expected.push(item.into());
        self
    }

    pub fn found(mut self, item: impl Into<String>) -> Self {
        self.found = Some(item.into());
        self
    }

    pub fn at(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut msg = self.message.clone();
        if !self.expected.is_empty() {
            msg.push_str(&format!(": expected {}", self.expected.join(" or ")));
        }
        if let Some(found) = &self.found {
            msg.push_str(&format!(", found {}", found));
        }
        match &self.span {
            Some(span) if !span.source.is_empty() => write!(f, "{}", span.to_string(&msg)),
            _ => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for ParseError {}

pub type ParseResult<T> = Result<T, ParseError>;

pub struct ParseState {
    tokens: Vec<Token>,
    index: usize,
    furthest: Option<(usize, ParseError)>,
}

impl ParseState {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            index: 0,
            furthest: None,
        }
    }

    pub fn advance(&mut self) -> Option<Token> {
        if self.has_next() {
            let token = self.tokens[self.index].clone();
            self.index += 1;
            Some(token)
        } else {
            None
        }
    }

    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.index)
    }

    pub fn has_next(&self) -> bool {
        self.index < self.tokens.len()
    }

    pub fn position(&self) -> usize {
        self.index
    }

    pub fn restore(&mut self, position: usize) {
        self.index = position;
    }

    /// Remember `err` if it happened at least as far into the input as any
    /// error seen so far. Backtracking discards errors, so the furthest one
    /// is usually the most useful to report.
    pub fn record_error(&mut self, err: ParseError) {
        match &self.furthest {
            Some((index, _)) if *index > self.index => {}
            _ => self.furthest = Some((self.index, err)),
        }
    }

    pub fn furthest_error(&self) -> Option<&ParseError> {
        self.furthest.as_ref().map(|(_, err)| err)
    }
}

pub trait Parser<T>: Sized {
    fn parse(&self, state: &mut ParseState) -> ParseResult<T>;
}

impl<T, F: Fn(&mut ParseState) -> ParseResult<T>> Parser<T> for F {
    fn parse(&self, state: &mut ParseState) -> ParseResult<T> {
        self(state)
    }
}
