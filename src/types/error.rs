//! # Type Error Definitions
//!
//! Errors raised while inferring types. Every variant carries the offending
//! name or types so the message can be shown without further context:
//!
//! - A variable is used but not in scope (`UnboundVar`)
//! - An `if` condition is not a `Bool` (`NonBoolCondition`)
//! - The two branches of an `if` disagree (`MismatchBranch`)
//! - Two types have different shapes (`CannotUnify`)
//! - A type would have to contain itself (`InfiniteType`)
//!
//! ```text
//! unbound variable 'x'
//! if condition must be Bool, found Num
//! if branches have different types: Num and Bool
//! cannot unify Num with Bool -> t1
//! cannot construct infinite type: t0 = t0 -> t1
//! ```

use thiserror::Error;

use super::ty::{Type, TypeVar};
use super::unify::UnifyError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InferError {
    #[error("unbound variable '{name}'")]
    UnboundVar { name: String },

    #[error("if condition must be Bool, found {found}")]
    NonBoolCondition { found: Type },

    #[error("if branches have different types: {then_branch} and {else_branch}")]
    MismatchBranch { then_branch: Type, else_branch: Type },

    #[error("cannot unify {left} with {right}")]
    CannotUnify { left: Type, right: Type },

    #[error("cannot construct infinite type: {var} = {ty}")]
    InfiniteType { var: TypeVar, ty: Type },
}

impl InferError {
    pub fn unbound_var(name: impl Into<String>) -> Self {
        InferError::UnboundVar { name: name.into() }
    }
}

impl From<UnifyError> for InferError {
    fn from(err: UnifyError) -> Self {
        match err {
            UnifyError::Mismatch { left, right } => InferError::CannotUnify { left, right },
            UnifyError::OccursCheck { var, ty } => InferError::InfiniteType { var, ty },
        }
    }
}
