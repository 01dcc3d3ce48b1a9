//! Hindley-Milner type inference.
//!
//! - [`ty`] - types, type variables and schemes
//! - [`subst`] - substitutions and their composition
//! - [`unify`] - unification with occurs check
//! - [`context`] - the static typing environment
//! - [`infer`] - Algorithm W

pub mod context;
pub mod error;
pub mod infer;
pub mod subst;
pub mod ty;
pub mod unify;

pub use context::Context;
pub use error::InferError;
pub use infer::{Infer, infer};
pub use subst::Substitution;
pub use ty::{Scheme, Type, TypeVar, TypeVarSupply};
pub use unify::{UnifyError, unify};
