//! Whole-program driver: source text in, value out.
//!
//! ```text
//! source ─lex→ tokens ─parse→ Program ─infer→ schemes ─interpret→ Value
//! ```
//!
//! Inference walks the bindings in program order. Each binding is inferred
//! against the schemes of the bindings before it (plus whatever the caller
//! put in the context), so a binding cannot mention itself or anything
//! defined later. Programs that rely on recursion have to go through
//! [`run_unchecked`].

use tracing::debug;

use crate::ast::Program;
use crate::error::Error;
use crate::interpreter::{self, Environment, Value};
use crate::lexer::Token;
use crate::parser::{ParseState, parse};
use crate::types::{Context, InferError, Scheme, infer};

/// Lex and parse `source` into a [`Program`].
pub fn parse_program(source: &str) -> Result<Program, Error> {
    let tokens = Token::lex(source).map_err(|e| Error::Lex(e.to_string()))?;
    let mut state = ParseState::new(tokens);
    let bindings = parse(&mut state)?;
    Ok(Program::new(bindings)?)
}

/// Infer every binding in order, extending `ctx` with each resulting scheme.
pub fn infer_program(
    program: &Program,
    ctx: &mut Context,
) -> Result<Vec<(String, Scheme)>, InferError> {
    let mut schemes = Vec::with_capacity(program.len());
    for binding in program.bindings() {
        let scheme = infer(&binding.expr, ctx)?;
        debug!("inferred {} : {}", binding.name, scheme);
        *ctx = ctx.insert(binding.name.clone(), scheme.clone());
        schemes.push((binding.name.clone(), scheme));
    }
    Ok(schemes)
}

/// Type check `program`, then evaluate its `main` binding.
pub fn run(program: &Program, env: &Environment<Value>, ctx: &mut Context) -> Result<Value, Error> {
    run_entry(program, env, ctx, interpreter::ENTRY)
}

/// Type check `program`, then evaluate the binding named `entry`.
pub fn run_entry(
    program: &Program,
    env: &Environment<Value>,
    ctx: &mut Context,
    entry: &str,
) -> Result<Value, Error> {
    infer_program(program, ctx)?;
    Ok(interpreter::interpret_entry(program, env, entry)?)
}

/// Evaluate `program` from `entry` without type checking it.
pub fn run_unchecked(
    program: &Program,
    env: &Environment<Value>,
    entry: &str,
) -> Result<Value, Error> {
    Ok(interpreter::interpret_entry(program, env, entry)?)
}

/// Parse, type check and evaluate `source`.
pub fn run_source(source: &str, env: &Environment<Value>, ctx: &mut Context) -> Result<Value, Error> {
    let program = parse_program(source)?;
    run(&program, env, ctx)
}
