use thiserror::Error;

use crate::interpreter::RuntimeError;
use crate::parser::ParseError;
use crate::types::InferError;

/// Any failure along the lex, parse, infer and evaluate pipeline.
#[derive(Debug, Error)]
pub enum Error {
    #[error("lexing failed: {0}")]
    Lex(String),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("type error: {0}")]
    Infer(#[from] InferError),

    #[error("runtime error: {0}")]
    Runtime(#[from] RuntimeError),
}
