use std::collections::HashMap;
use std::fmt;

use super::ty::{Type, TypeVar};

/// A set of simultaneous bindings from type variables to types.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Substitution(pub HashMap<TypeVar, Type>);

impl Substitution {
    pub fn empty() -> Self {
        Substitution(HashMap::new())
    }

    pub fn singleton(var: TypeVar, ty: Type) -> Self {
        let mut map = HashMap::new();
        map.insert(var, ty);
        Substitution(map)
    }

    pub fn get(&self, var: &TypeVar) -> Option<&Type> {
        self.0.get(var)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn apply(&self, ty: &Type) -> Type {
        match ty {
            Type::Con(_) => ty.clone(),
            Type::Var(v) => self.0.get(v).cloned().unwrap_or_else(|| ty.clone()),
            Type::Arrow(from, to) => Type::func(self.apply(from), self.apply(to)),
        }
    }

    /// The substitution equivalent to applying `other` first and `self`
    /// afterwards.
    ///
    /// ```text
    /// (self.compose(other)).apply(t) == self.apply(&other.apply(t))
    /// ```
    pub fn compose(&self, other: &Substitution) -> Substitution {
        let mut result = HashMap::new();

        for (var, ty) in &other.0 {
            result.insert(*var, self.apply(ty));
        }

        for (var, ty) in &self.0 {
            if !result.contains_key(var) {
                result.insert(*var, ty.clone());
            }
        }

        Substitution(result)
    }

    /// A copy of this substitution with the given variables unmapped.
    pub fn without(&self, vars: &[TypeVar]) -> Substitution {
        Substitution(
            self.0
                .iter()
                .filter(|(var, _)| !vars.contains(var))
                .map(|(var, ty)| (*var, ty.clone()))
                .collect(),
        )
    }

    pub fn insert(&mut self, var: TypeVar, ty: Type) {
        self.0.insert(var, ty);
    }
}

impl fmt::Display for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut entries: Vec<_> = self.0.iter().collect();
        entries.sort_by_key(|(var, _)| **var);
        let entries: Vec<_> = entries
            .into_iter()
            .map(|(var, ty)| format!("{} := {}", var, ty))
            .collect();
        write!(f, "[{}]", entries.join(", "))
    }
}
