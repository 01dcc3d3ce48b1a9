//! # Unification
//!
//! [`unify`] finds the most general substitution that makes two types equal.
//! Inference calls it wherever two types must agree: an `if` condition and
//! `Bool`, the two branches of an `if`, a function and the argument it is
//! applied to.

use std::fmt;

use tracing::trace;

use super::subst::Substitution;
use super::ty::{Type, TypeVar};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnifyError {
    Mismatch { left: Type, right: Type },
    OccursCheck { var: TypeVar, ty: Type },
}

impl fmt::Display for UnifyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            UnifyError::Mismatch { left, right } => {
                write!(f, "cannot unify {} with {}", left, right)
            }
            UnifyError::OccursCheck { var, ty } => {
                write!(f, "cannot construct infinite type {} = {}", var, ty)
            }
        }
    }
}

/// Check if a type variable occurs within a type.
///
/// # Why Is This Important?
///
/// Binding `t0` to `t0 -> Num` would describe an infinite type:
///
/// ```text
/// t0 = t0 -> Num
///    = (t0 -> Num) -> Num
///    = ((t0 -> Num) -> Num) -> Num
///    = ...
/// ```
///
/// [`unify`] refuses any binding where this returns `true`. Self-application
/// such as `\x. x x` is the usual way to hit it.
///
/// # Arguments
///
/// * `var` - The type variable to search for
/// * `ty` - The type to search within
///
/// # Returns
///
/// `true` if `var` appears anywhere in `ty`
///
/// # Examples
///
/// ```text
/// occurs_in(t0, Num)       = false
/// occurs_in(t0, t0)        = true
/// occurs_in(t0, t1 -> t0)  = true
/// ```
fn occurs_in(var: &TypeVar, ty: &Type) -> bool {
    match ty {
        Type::Con(_) => false,
        Type::Var(v) => v == var,
        Type::Arrow(from, to) => occurs_in(var, from) || occurs_in(var, to),
    }
}

fn bind(var: &TypeVar, ty: &Type) -> Result<Substitution, UnifyError> {
    if let Type::Var(other) = ty {
        if other == var {
            return Ok(Substitution::empty());
        }
    }

    if occurs_in(var, ty) {
        return Err(UnifyError::OccursCheck {
            var: *var,
            ty: ty.clone(),
        });
    }

    Ok(Substitution::singleton(*var, ty.clone()))
}

/// Compute the most general substitution making `t1` and `t2` equal.
///
/// # Arguments
///
/// * `t1` - The first type, usually the one already known
/// * `t2` - The second type, usually the one demanded by the context
///
/// # Returns
///
/// A substitution `s` with `s.apply(t1) == s.apply(t2)`. No other
/// substitution with that property binds fewer variables.
///
/// # Errors
///
/// * [`UnifyError::Mismatch`] when the shapes differ, such as `Num` against `Bool`
/// * [`UnifyError::OccursCheck`] when a variable would have to contain itself
///
/// # Examples
///
/// ```text
/// unify(Num, Num)                = []
/// unify(t0, Num)                 = [t0 := Num]
/// unify(t0 -> t1, Num -> Bool)   = [t0 := Num, t1 := Bool]
/// unify(Num, Bool)               = Err(Mismatch)
/// unify(t0, t0 -> Num)           = Err(OccursCheck)
/// ```
///
/// For arrows the argument types are unified first and the resulting
/// substitution is applied to both result types before unifying those, so
/// decisions made on the left are visible on the right.
pub fn unify(t1: &Type, t2: &Type) -> Result<Substitution, UnifyError> {
    trace!("unify {} ~ {}", t1, t2);

    match (t1, t2) {
        (Type::Var(v), t) | (t, Type::Var(v)) => bind(v, t),

        (Type::Con(a), Type::Con(b)) if a == b => Ok(Substitution::empty()),

        (Type::Arrow(from1, to1), Type::Arrow(from2, to2)) => {
            let s1 = unify(from1, from2)?;
            let s2 = unify(&s1.apply(to1), &s1.apply(to2))?;
            Ok(s2.compose(&s1))
        }

        _ => Err(UnifyError::Mismatch {
            left: t1.clone(),
            right: t2.clone(),
        }),
    }
}
