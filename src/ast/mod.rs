use std::collections::HashSet;

use crate::interpreter::RuntimeError;

pub mod expression;

pub use expression::Expr;

/// A named top-level definition: `def name = expr`
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    pub name: String,
    pub expr: Expr,
}

impl Binding {
    pub fn new(name: impl Into<String>, expr: Expr) -> Self {
        Binding {
            name: name.into(),
            expr,
        }
    }
}

/// An ordered sequence of bindings with unique names.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    bindings: Vec<Binding>,
}

impl Program {
    /// Build a program, rejecting any name that is bound more than once.
    pub fn new(bindings: Vec<Binding>) -> Result<Self, RuntimeError> {
        let mut seen = HashSet::new();
        for binding in &bindings {
            if !seen.insert(binding.name.as_str()) {
                return Err(RuntimeError::DuplicateBinding {
                    name: binding.name.clone(),
                });
            }
        }
        Ok(Program { bindings })
    }

    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    pub fn get(&self, name: &str) -> Option<&Expr> {
        self.bindings
            .iter()
            .find(|binding| binding.name == name)
            .map(|binding| &binding.expr)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
