use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use super::error::RuntimeError;

struct Frame<V> {
    bindings: RefCell<HashMap<String, V>>,
    parent: Option<Rc<Frame<V>>>,
}

/// A chain of mutable scopes with parent-delegated lookup.
///
/// Cloning an `Environment` yields another handle to the *same* scope, so a
/// [`define`](Environment::define) through one handle is visible through
/// every other, including handles captured by closures.
pub struct Environment<V> {
    frame: Rc<Frame<V>>,
}

impl<V> Clone for Environment<V> {
    fn clone(&self) -> Self {
        Environment {
            frame: Rc::clone(&self.frame),
        }
    }
}

impl<V> Default for Environment<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Environment<V> {
    /// Create a new root scope
    pub fn new() -> Self {
        Environment {
            frame: Rc::new(Frame {
                bindings: RefCell::new(HashMap::new()),
                parent: None,
            }),
        }
    }

    /// Create a child scope whose lookups fall back to this one
    pub fn local(&self) -> Self {
        Environment {
            frame: Rc::new(Frame {
                bindings: RefCell::new(HashMap::new()),
                parent: Some(Rc::clone(&self.frame)),
            }),
        }
    }

    /// Insert or overwrite a binding in this scope only
    pub fn define(&self, name: impl Into<String>, value: V) {
        self.frame.bindings.borrow_mut().insert(name.into(), value);
    }

    /// Whether `name` is bound in this scope, ignoring ancestors
    pub fn defines(&self, name: &str) -> bool {
        self.frame.bindings.borrow().contains_key(name)
    }

    /// Whether both handles refer to the same scope
    pub fn same_scope(&self, other: &Environment<V>) -> bool {
        Rc::ptr_eq(&self.frame, &other.frame)
    }
}

impl<V: Clone> Environment<V> {
    /// Resolve a name by walking from this scope up to the root
    pub fn lookup(&self, name: &str) -> Result<V, RuntimeError> {
        let mut frame = Some(&self.frame);
        while let Some(current) = frame {
            if let Some(value) = current.bindings.borrow().get(name) {
                return Ok(value.clone());
            }
            frame = current.parent.as_ref();
        }
        Err(RuntimeError::Lookup {
            name: name.to_string(),
        })
    }
}

impl<V> fmt::Debug for Environment<V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut names: Vec<_> = self.frame.bindings.borrow().keys().cloned().collect();
        names.sort();
        f.debug_struct("Environment")
            .field("names", &names)
            .field("has_parent", &self.frame.parent.is_some())
            .finish()
    }
}
