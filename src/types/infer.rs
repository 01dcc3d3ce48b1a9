//! # Algorithm W
//!
//! Syntax-directed inference over [`Expr`]: every node yields a type together
//! with the substitution accumulated while checking it. Substitutions are
//! always composed in the order they were discovered, so the final
//! substitution of a node is `s_n ∘ ... ∘ s_1`.
//!
//! Fresh type variables come from a [`TypeVarSupply`] owned by the [`Infer`]
//! instance, so independent inference runs never share state.
//!
//! # Rules
//!
//! ```text
//! Num, Bool          literal type, empty substitution
//! x                  instantiate the scheme of x
//! if c then a else b c ~ Bool, then a ~ b
//! let x = d in b     generalize d against the context, then check b
//! \x body            x gets a fresh monomorphic variable
//! f a                f ~ (a -> fresh)
//! ```

use tracing::debug;

use super::context::Context;
use super::error::InferError;
use super::subst::Substitution;
use super::ty::{Scheme, Type, TypeVarSupply};
use super::unify::unify;
use crate::ast::Expr;

/// State of a single inference run.
///
/// An `Infer` only carries its variable supply. Build one per run with
/// [`Infer::for_context`] so that fresh variables never collide with the
/// variables already free in the context being checked.
pub struct Infer {
    supply: TypeVarSupply,
}

impl Infer {
    pub fn new() -> Self {
        Infer {
            supply: TypeVarSupply::new(),
        }
    }

    /// An inference run over `ctx`, numbering fresh variables above every
    /// variable free in it.
    pub fn for_context(ctx: &Context) -> Self {
        Infer {
            supply: TypeVarSupply::starting_after(ctx),
        }
    }

    /// Run Algorithm W on `expr`.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Schemes of the variables in scope
    /// * `expr` - The expression to check
    ///
    /// # Returns
    ///
    /// The type of `expr` and the substitution discovered while checking it.
    /// Apply the substitution to the type, and to `ctx`, before reading
    /// either; [`infer`] does this for the top level.
    ///
    /// # Errors
    ///
    /// Any [`InferError`]. The first failure stops the run.
    pub fn infer_expr(
        &mut self,
        ctx: &Context,
        expr: &Expr,
    ) -> Result<(Type, Substitution), InferError> {
        match expr {
            Expr::Num(_) => Ok((Type::num(), Substitution::empty())),

            Expr::Bool(_) => Ok((Type::bool(), Substitution::empty())),

            Expr::Var(name) => match ctx.get(name) {
                Some(scheme) => {
                    // the instantiation is already applied to the returned type
                    let ty = scheme.instantiate(&mut self.supply);
                    Ok((ty, Substitution::empty()))
                }
                None => Err(InferError::unbound_var(name.clone())),
            },

            Expr::If(condition, then_branch, else_branch) => {
                self.infer_if(ctx, condition, then_branch, else_branch)
            }

            Expr::Let(name, definition, body) => self.infer_let(ctx, name, definition, body),

            Expr::Lambda(param, body) => self.infer_lambda(ctx, param, body),

            Expr::App(func, arg) => self.infer_app(ctx, func, arg),
        }
    }

    fn infer_if(
        &mut self,
        ctx: &Context,
        condition: &Expr,
        then_branch: &Expr,
        else_branch: &Expr,
    ) -> Result<(Type, Substitution), InferError> {
        let (cond_ty, s1) = self.infer_expr(ctx, condition)?;
        let s2 = unify(&cond_ty, &Type::bool()).map_err(|_| InferError::NonBoolCondition {
            found: s1.apply(&cond_ty),
        })?;
        let subst = s2.compose(&s1);

        let (then_ty, s3) = self.infer_expr(&ctx.apply_subst(&subst), then_branch)?;
        let subst = s3.compose(&subst);

        let (else_ty, s4) = self.infer_expr(&ctx.apply_subst(&subst), else_branch)?;
        let subst = s4.compose(&subst);

        let then_ty = subst.apply(&then_ty);
        let else_ty = subst.apply(&else_ty);
        let s5 = unify(&then_ty, &else_ty).map_err(|_| InferError::MismatchBranch {
            then_branch: then_ty.clone(),
            else_branch: else_ty.clone(),
        })?;
        let subst = s5.compose(&subst);

        Ok((subst.apply(&then_ty), subst))
    }

    fn infer_let(
        &mut self,
        ctx: &Context,
        name: &str,
        definition: &Expr,
        body: &Expr,
    ) -> Result<(Type, Substitution), InferError> {
        let (def_ty, s1) = self.infer_expr(ctx, definition)?;

        let ctx1 = ctx.remove(name).apply_subst(&s1);
        let scheme = Scheme::generalize(&ctx1, &s1.apply(&def_ty));
        let ctx2 = ctx1.insert(name, scheme);

        let (body_ty, s2) = self.infer_expr(&ctx2, body)?;
        Ok((body_ty, s2.compose(&s1)))
    }

    fn infer_lambda(
        &mut self,
        ctx: &Context,
        param: &str,
        body: &Expr,
    ) -> Result<(Type, Substitution), InferError> {
        // lambda parameters stay monomorphic inside their own body
        let param_ty = self.supply.fresh_type();
        let param_ctx = Context::with_bindings(vec![(
            param.to_string(),
            Scheme::monomorphic(param_ty.clone()),
        )]);
        let ctx1 = ctx.remove(param).union(&param_ctx);

        let (body_ty, s) = self.infer_expr(&ctx1, body)?;
        Ok((Type::func(s.apply(&param_ty), body_ty), s))
    }

    fn infer_app(
        &mut self,
        ctx: &Context,
        func: &Expr,
        arg: &Expr,
    ) -> Result<(Type, Substitution), InferError> {
        let result_ty = self.supply.fresh_type();

        let (func_ty, s1) = self.infer_expr(ctx, func)?;
        let (arg_ty, s2) = self.infer_expr(&ctx.apply_subst(&s1), arg)?;

        let expected = Type::func(arg_ty, result_ty.clone());
        let s3 = unify(&s2.apply(&func_ty), &expected)?;

        Ok((s3.apply(&result_ty), s3.compose(&s2).compose(&s1)))
    }
}

impl Default for Infer {
    fn default() -> Self {
        Self::new()
    }
}

/// Infer the principal scheme of `expr` under `ctx`.
///
/// This is the entry point hosts use. It runs [`Infer::infer_expr`], applies
/// the final substitution, then generalizes against the substituted context.
///
/// # Arguments
///
/// * `expr` - The expression to type
/// * `ctx` - Global schemes, for example builtins and earlier bindings
///
/// # Returns
///
/// The principal scheme, compacted so that quantified variables are numbered
/// `t0, t1, ...` in order of first occurrence. Variables free in `ctx` keep
/// their ids and are never quantified:
///
/// ```text
/// infer(\x. x, {})              = forall t0. t0 -> t0
/// infer(\y. x, {x : t0})        = forall t1. t1 -> t0
/// infer(plus1 1, {plus1 : Num -> Num}) = Num
/// ```
///
/// # Errors
///
/// * [`InferError::UnboundVar`] for a name missing from `ctx`
/// * [`InferError::NonBoolCondition`] and [`InferError::MismatchBranch`] for `if`
/// * [`InferError::CannotUnify`] and [`InferError::InfiniteType`] from [`unify`]
pub fn infer(expr: &Expr, ctx: &Context) -> Result<Scheme, InferError> {
    let mut infer = Infer::for_context(ctx);
    let (ty, subst) = infer.infer_expr(ctx, expr)?;
    let ty = subst.apply(&ty);
    let scheme = Scheme::generalize(&ctx.apply_subst(&subst), &ty).compact();
    debug!("inferred {} : {}", expr, scheme);
    Ok(scheme)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TypeVar;

    fn identity() -> Expr {
        Expr::lambda("x", Expr::var("x"))
    }

    #[test]
    fn test_infer_literals() {
        assert_eq!(
            infer(&Expr::num(1.0), &Context::empty()),
            Ok(Scheme::monomorphic(Type::num()))
        );
        assert_eq!(
            infer(&Expr::bool(true), &Context::empty()),
            Ok(Scheme::monomorphic(Type::bool()))
        );
    }

    #[test]
    fn test_infer_identity() {
        let scheme = infer(&identity(), &Context::empty()).unwrap();
        assert_eq!(
            scheme,
            Scheme::polymorphic(vec![TypeVar(0)], Type::func(Type::var(0), Type::var(0)))
        );
    }

    #[test]
    fn test_infer_const() {
        let expr = Expr::lambda("x", Expr::lambda("y", Expr::var("x")));
        let scheme = infer(&expr, &Context::empty()).unwrap();
        assert_eq!(scheme.to_string(), "forall t0 t1. t0 -> t1 -> t0");
    }

    #[test]
    fn test_let_polymorphism() {
        let expr = Expr::let_("id", identity(), Expr::app(Expr::var("id"), Expr::bool(true)));
        assert_eq!(
            infer(&expr, &Context::empty()),
            Ok(Scheme::monomorphic(Type::bool()))
        );
    }

    #[test]
    fn test_let_bound_used_at_two_types() {
        // let id = \x. x in if id True then id 1 else 2
        let expr = Expr::let_(
            "id",
            identity(),
            Expr::if_(
                Expr::app(Expr::var("id"), Expr::bool(true)),
                Expr::app(Expr::var("id"), Expr::num(1.0)),
                Expr::num(2.0),
            ),
        );
        assert_eq!(
            infer(&expr, &Context::empty()),
            Ok(Scheme::monomorphic(Type::num()))
        );
    }

    #[test]
    fn test_lambda_param_is_monomorphic() {
        // \f. if f True then f 1 else 2 cannot be typed
        let expr = Expr::lambda(
            "f",
            Expr::if_(
                Expr::app(Expr::var("f"), Expr::bool(true)),
                Expr::app(Expr::var("f"), Expr::num(1.0)),
                Expr::num(2.0),
            ),
        );
        assert!(infer(&expr, &Context::empty()).is_err());
    }

    #[test]
    fn test_unbound_variable() {
        assert_eq!(
            infer(&Expr::var("x"), &Context::empty()),
            Err(InferError::unbound_var("x"))
        );
    }

    #[test]
    fn test_if_unifies_condition() {
        // \c. if c then 1 else 2 : Bool -> Num
        let expr = Expr::lambda(
            "c",
            Expr::if_(Expr::var("c"), Expr::num(1.0), Expr::num(2.0)),
        );
        let scheme = infer(&expr, &Context::empty()).unwrap();
        assert_eq!(scheme, Scheme::monomorphic(Type::func(Type::bool(), Type::num())));
    }

    #[test]
    fn test_if_non_bool_condition() {
        let expr = Expr::if_(Expr::num(0.0), Expr::num(1.0), Expr::num(2.0));
        assert_eq!(
            infer(&expr, &Context::empty()),
            Err(InferError::NonBoolCondition { found: Type::num() })
        );
    }

    #[test]
    fn test_if_mismatched_branches() {
        let expr = Expr::if_(Expr::bool(true), Expr::num(1.0), Expr::bool(false));
        assert!(matches!(
            infer(&expr, &Context::empty()),
            Err(InferError::MismatchBranch { .. })
        ));
    }

    #[test]
    fn test_self_application_is_infinite() {
        let expr = Expr::lambda("x", Expr::app(Expr::var("x"), Expr::var("x")));
        assert!(matches!(
            infer(&expr, &Context::empty()),
            Err(InferError::InfiniteType { .. })
        ));
    }

    #[test]
    fn test_applying_a_number_fails() {
        let expr = Expr::app(Expr::num(1.0), Expr::num(2.0));
        assert!(matches!(
            infer(&expr, &Context::empty()),
            Err(InferError::CannotUnify { .. })
        ));
    }

    #[test]
    fn test_global_context() {
        let ctx = Context::empty().insert(
            "plus1",
            Scheme::monomorphic(Type::func(Type::num(), Type::num())),
        );
        let expr = Expr::app(Expr::var("plus1"), Expr::num(1.0));
        assert_eq!(infer(&expr, &ctx), Ok(Scheme::monomorphic(Type::num())));
    }

    #[test]
    fn test_fresh_vars_avoid_context_vars() {
        // x : t0 is free, so the parameter must not reuse t0
        let ctx = Context::empty().insert("x", Scheme::monomorphic(Type::var(0)));
        let expr = Expr::lambda("y", Expr::var("x"));
        let scheme = infer(&expr, &ctx).unwrap();
        assert_eq!(
            scheme,
            Scheme::polymorphic(vec![TypeVar(1)], Type::func(Type::var(1), Type::var(0)))
        );
        assert_eq!(scheme.to_string(), "forall t1. t1 -> t0");
    }

    #[test]
    fn test_applying_to_context_var_is_not_generalized() {
        // (\y. x) True is x itself, so its type stays tied to the context
        let ctx = Context::empty().insert("x", Scheme::monomorphic(Type::var(0)));
        let expr = Expr::app(Expr::lambda("y", Expr::var("x")), Expr::bool(true));
        let scheme = infer(&expr, &ctx).unwrap();
        assert!(scheme.vars.is_empty());
        assert!(matches!(scheme.ty, Type::Var(_)));
    }

    #[test]
    fn test_partial_application_instantiates() {
        // const 1 : forall a. a -> Num
        let ctx = Context::empty().insert(
            "const",
            Scheme::polymorphic(
                vec![TypeVar(0), TypeVar(1)],
                Type::func(Type::var(0), Type::func(Type::var(1), Type::var(0))),
            ),
        );
        let expr = Expr::app(Expr::var("const"), Expr::num(1.0));
        let scheme = infer(&expr, &ctx).unwrap();
        assert_eq!(
            scheme,
            Scheme::polymorphic(vec![TypeVar(0)], Type::func(Type::var(0), Type::num()))
        );
    }

    #[test]
    fn test_independent_runs_restart_numbering() {
        let first = infer(&identity(), &Context::empty()).unwrap();
        let second = infer(&identity(), &Context::empty()).unwrap();
        assert_eq!(first, second);
    }
}
