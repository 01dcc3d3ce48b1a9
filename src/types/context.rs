use std::collections::{BTreeMap, HashSet};

use super::subst::Substitution;
use super::ty::{Scheme, TypeVar};

/// The static typing environment: a flat map from names to schemes.
///
/// All operations are non-destructive and return a new context.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Context {
    bindings: BTreeMap<String, Scheme>,
}

impl Context {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_bindings(bindings: Vec<(String, Scheme)>) -> Self {
        Context {
            bindings: bindings.into_iter().collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Scheme> {
        self.bindings.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn insert(&self, name: impl Into<String>, scheme: Scheme) -> Context {
        let mut bindings = self.bindings.clone();
        bindings.insert(name.into(), scheme);
        Context { bindings }
    }

    pub fn remove(&self, name: &str) -> Context {
        let mut bindings = self.bindings.clone();
        bindings.remove(name);
        Context { bindings }
    }

    /// Left-biased merge: on a name collision the binding in `self` wins.
    pub fn union(&self, other: &Context) -> Context {
        let mut bindings = self.bindings.clone();
        for (name, scheme) in &other.bindings {
            bindings
                .entry(name.clone())
                .or_insert_with(|| scheme.clone());
        }
        Context { bindings }
    }

    pub fn apply_subst(&self, subst: &Substitution) -> Context {
        Context {
            bindings: self
                .bindings
                .iter()
                .map(|(name, scheme)| (name.clone(), scheme.apply_subst(subst)))
                .collect(),
        }
    }

    pub fn free_type_vars(&self) -> HashSet<TypeVar> {
        self.bindings
            .values()
            .flat_map(|scheme| scheme.free_type_vars())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Scheme)> {
        self.bindings.iter()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
