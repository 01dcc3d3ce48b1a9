use std::fmt;
use std::rc::Rc;

use crate::ast::Expr;

use super::error::RuntimeError;
use super::scope::Environment;

/// A user-defined function together with the scope it closes over.
///
/// The scope is a child of the environment in effect when the lambda was
/// evaluated. Applying the function binds the parameter *in that scope*, so
/// every application of the same closure reuses it.
#[derive(Debug)]
pub struct Closure {
    pub param: String,
    pub body: Rc<Expr>,
    pub env: Environment<Value>,
}

type NativeFn = dyn Fn(Value) -> Result<Value, RuntimeError>;

/// A host function exposed to programs.
#[derive(Clone)]
pub struct Native(Rc<NativeFn>);

impl Native {
    pub fn new(func: impl Fn(Value) -> Result<Value, RuntimeError> + 'static) -> Self {
        Native(Rc::new(func))
    }

    pub fn call(&self, arg: Value) -> Result<Value, RuntimeError> {
        (self.0)(arg)
    }
}

impl fmt::Debug for Native {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Native")
    }
}

/// Runtime value representation
#[derive(Debug, Clone)]
pub enum Value {
    Num(f64),
    Bool(bool),
    Function(Rc<Closure>),
    Native(Native),
}

impl Value {
    pub fn native(func: impl Fn(Value) -> Result<Value, RuntimeError> + 'static) -> Self {
        Value::Native(Native::new(func))
    }

    pub fn as_num(&self) -> Result<f64, RuntimeError> {
        match self {
            Value::Num(n) => Ok(*n),
            other => Err(RuntimeError::TypeMismatch {
                expected: "Num".to_string(),
                found: other.to_string(),
            }),
        }
    }

    pub fn as_bool(&self) -> Result<bool, RuntimeError> {
        match self {
            Value::Bool(b) => Ok(*b),
            other => Err(RuntimeError::TypeMismatch {
                expected: "Bool".to_string(),
                found: other.to_string(),
            }),
        }
    }

    pub fn is_callable(&self) -> bool {
        matches!(self, Value::Function(_) | Value::Native(_))
    }

    /// Apply this value to `arg`.
    pub fn apply(&self, arg: Value) -> Result<Value, RuntimeError> {
        match self {
            Value::Function(closure) => {
                closure.env.define(closure.param.clone(), arg);
                closure.body.eval(&closure.env)
            }
            Value::Native(native) => native.call(arg),
            other => Err(RuntimeError::NotCallable {
                found: other.to_string(),
            }),
        }
    }
}

/// Numbers and booleans compare by value, functions by identity.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Num(a), Value::Num(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
            (Value::Native(a), Value::Native(b)) => Rc::ptr_eq(&a.0, &b.0),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Num(n) => write!(f, "{}", n),
            Value::Bool(true) => write!(f, "True"),
            Value::Bool(false) => write!(f, "False"),
            Value::Function(closure) => write!(f, "<function \\{}>", closure.param),
            Value::Native(_) => write!(f, "<native>"),
        }
    }
}
