use std::collections::{HashMap, HashSet};
use std::fmt;

use super::context::Context;
use super::subst::Substitution;

pub const NUM: &str = "Num";
pub const BOOL: &str = "Bool";

/// Identifier of a unification variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeVar(pub usize);

impl fmt::Display for TypeVar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "t{}", self.0)
    }
}

/// Source of fresh type variables for a single inference run.
#[derive(Debug, Default)]
pub struct TypeVarSupply {
    next: usize,
}

impl TypeVarSupply {
    pub fn new() -> Self {
        Self::default()
    }

    /// A supply whose ids start above every variable free in `context`.
    ///
    /// Hosts may seed a context with monomorphic bindings such as `x : t0`.
    /// Numbering a run from zero would hand out `t0` again and silently tie
    /// the new variable to `x`.
    pub fn starting_after(context: &Context) -> Self {
        let next = context
            .free_type_vars()
            .into_iter()
            .map(|TypeVar(id)| id + 1)
            .max()
            .unwrap_or(0);
        TypeVarSupply { next }
    }

    pub fn fresh(&mut self) -> TypeVar {
        let id = self.next;
        self.next += 1;
        TypeVar(id)
    }

    pub fn fresh_type(&mut self) -> Type {
        Type::Var(self.fresh())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    Var(TypeVar),
    Con(String),
    Arrow(Box<Type>, Box<Type>),
}

impl Type {
    pub fn num() -> Self {
        Type::Con(NUM.to_string())
    }

    pub fn bool() -> Self {
        Type::Con(BOOL.to_string())
    }

    pub fn var(id: usize) -> Self {
        Type::Var(TypeVar(id))
    }

    pub fn func(from: Type, to: Type) -> Self {
        Type::Arrow(Box::new(from), Box::new(to))
    }

    pub fn free_type_vars(&self) -> HashSet<TypeVar> {
        match self {
            Type::Con(_) => HashSet::new(),
            Type::Var(v) => {
                let mut set = HashSet::new();
                set.insert(*v);
                set
            }
            Type::Arrow(from, to) => {
                let mut set = from.free_type_vars();
                set.extend(to.free_type_vars());
                set
            }
        }
    }

    /// Type variables in order of first (left-to-right) occurrence.
    pub fn vars_in_order(&self) -> Vec<TypeVar> {
        fn walk(ty: &Type, out: &mut Vec<TypeVar>) {
            match ty {
                Type::Con(_) => {}
                Type::Var(v) => {
                    if !out.contains(v) {
                        out.push(*v);
                    }
                }
                Type::Arrow(from, to) => {
                    walk(from, out);
                    walk(to, out);
                }
            }
        }

        let mut out = Vec::new();
        walk(self, &mut out);
        out
    }

    pub fn pretty(&self) -> String {
        match self {
            Type::Con(name) => name.clone(),
            Type::Var(v) => v.to_string(),
            Type::Arrow(from, to) => {
                let from_str = if matches!(**from, Type::Arrow(_, _)) {
                    format!("({})", from.pretty())
                } else {
                    from.pretty()
                };
                format!("{} -> {}", from_str, to.pretty())
            }
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.pretty())
    }
}

/// A universally quantified type: `forall vars. ty`.
///
/// Only the variables listed in `vars` are generalized; any other variable
/// occurring in `ty` stays free.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scheme {
    pub vars: Vec<TypeVar>,
    pub ty: Type,
}

impl Scheme {
    pub fn monomorphic(ty: Type) -> Self {
        Scheme {
            vars: Vec::new(),
            ty,
        }
    }

    pub fn polymorphic(vars: Vec<TypeVar>, ty: Type) -> Self {
        Scheme { vars, ty }
    }

    pub fn free_type_vars(&self) -> HashSet<TypeVar> {
        let mut free = self.ty.free_type_vars();
        for var in &self.vars {
            free.remove(var);
        }
        free
    }

    /// Apply `subst` to the body, leaving the quantified variables alone.
    pub fn apply_subst(&self, subst: &Substitution) -> Scheme {
        Scheme {
            vars: self.vars.clone(),
            ty: subst.without(&self.vars).apply(&self.ty),
        }
    }

    /// Quantify every variable of `ty` that is not free in `context`.
    pub fn generalize(context: &Context, ty: &Type) -> Scheme {
        let free_in_ctx = context.free_type_vars();
        let mut vars: Vec<_> = ty.free_type_vars().difference(&free_in_ctx).copied().collect();
        vars.sort();
        Scheme {
            vars,
            ty: ty.clone(),
        }
    }

    /// Replace each quantified variable with a fresh one drawn from `supply`.
    pub fn instantiate(&self, supply: &mut TypeVarSupply) -> Type {
        let subst: HashMap<_, _> = self
            .vars
            .iter()
            .map(|v| (*v, supply.fresh_type()))
            .collect();
        Substitution(subst).apply(&self.ty)
    }

    /// Renumber the quantified variables to `t0..tn` in order of first
    /// occurrence. Ids that are free in the scheme are never reused.
    pub fn compact(&self) -> Scheme {
        let free = self.free_type_vars();
        let mut renaming = HashMap::new();
        let mut vars = Vec::new();
        let mut next = 0;

        for var in self.ty.vars_in_order() {
            if !self.vars.contains(&var) {
                continue;
            }
            while free.contains(&TypeVar(next)) {
                next += 1;
            }
            renaming.insert(var, Type::var(next));
            vars.push(TypeVar(next));
            next += 1;
        }

        Scheme {
            vars,
            ty: Substitution(renaming).apply(&self.ty),
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.vars.is_empty() {
            write!(f, "{}", self.ty)
        } else {
            let vars: Vec<_> = self.vars.iter().map(|v| v.to_string()).collect();
            write!(f, "forall {}. {}", vars.join(" "), self.ty)
        }
    }
}
