//! # Hindley - a tiny lambda language with Hindley-Milner inference
//!
//! Programs are a list of top-level bindings over numbers, booleans,
//! single-parameter lambdas, `let` and `if`. Every binding is given a
//! principal type scheme by Algorithm W before it is evaluated by a strict,
//! environment-based tree-walking interpreter.
//!
//! ## Pipeline Flow
//!
//! ```text
//! Source Code (String)
//!     ↓
//! [Lexer] → Token Stream
//!     ↓
//! [Parser] → Program (ast::Program)
//!     ↓
//! [Type Inference] → one Scheme per binding (types::Scheme)
//!     ↓
//! [Interpreter] → Runtime Value (interpreter::Value)
//! ```
//!
//! ## Module Structure
//!
//! - [`ast`] - Expressions, bindings and programs
//! - [`types`] - Types, schemes, substitutions, unification and inference
//! - [`interpreter`] - Scoped environments, runtime values and evaluation
//! - [`builtins`] - Host functions paired with their type schemes
//! - [`lexer`] - Tokenization using lachs
//! - [`parser`] - Parsing using combinator-based grammar
//! - [`runner`] - Lex, parse, infer and run whole programs
//!
//! ## Example Program
//!
//! ```text
//! def twice = \f \x f (f x)
//! def main = twice incr 40
//! ```
//!
//! `twice` is inferred as `forall t0. (t0 -> t0) -> t0 -> t0` and `main`
//! evaluates to `42`.
//!
//! ## Usage
//!
//! ```no_run
//! use hindley::{Builtins, Context, Environment, run_source};
//!
//! let env = Environment::new();
//! let mut ctx = Context::empty();
//! Builtins::standard().install(&env, &mut ctx);
//!
//! let value = run_source("def main = add 1 2", &env, &mut ctx)?;
//! println!("{}", value);
//! # Ok::<(), hindley::Error>(())
//! ```

pub mod ast;
pub mod builtins;
pub mod error;
pub mod interpreter;
pub mod lexer;
pub mod parser;
pub mod runner;
pub mod types;

pub use ast::{Binding, Expr, Program};
pub use builtins::Builtins;
pub use error::Error;
pub use interpreter::{Environment, RuntimeError, Value, evaluate, interpret};
pub use runner::{infer_program, parse_program, run, run_entry, run_source, run_unchecked};
pub use types::{Context, InferError, Scheme, Substitution, Type, TypeVar, infer, unify};
