//! Host functions available to programs.
//!
//! A builtin is a native closure paired with the type scheme the inferencer
//! should assume for it. [`Builtins::install`] puts the value into an
//! [`Environment`] and the scheme into a [`Context`] under the same name.

use tracing::debug;

use crate::interpreter::{Environment, RuntimeError, Value};
use crate::types::{Context, Scheme, Type};

struct Builtin {
    name: String,
    scheme: Scheme,
    value: Value,
}

#[derive(Default)]
pub struct Builtins {
    entries: Vec<Builtin>,
}

impl Builtins {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a native under `name`. A later definition with the same name
    /// replaces the earlier one.
    pub fn define(
        mut self,
        name: impl Into<String>,
        scheme: Scheme,
        native: impl Fn(Value) -> Result<Value, RuntimeError> + 'static,
    ) -> Self {
        let name = name.into();
        self.entries.retain(|entry| entry.name != name);
        self.entries.push(Builtin {
            name,
            scheme,
            value: Value::native(native),
        });
        self
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    pub fn scheme(&self, name: &str) -> Option<&Scheme> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| &entry.scheme)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn install(&self, env: &Environment<Value>, ctx: &mut Context) {
        for entry in &self.entries {
            debug!("installing builtin {} : {}", entry.name, entry.scheme);
            env.define(entry.name.clone(), entry.value.clone());
            *ctx = ctx.insert(entry.name.clone(), entry.scheme.clone());
        }
    }

    /// Numeric prelude. Binary operations are curried.
    pub fn standard() -> Self {
        let num_binop = Scheme::monomorphic(Type::func(
            Type::num(),
            Type::func(Type::num(), Type::num()),
        ));
        let num_compare = Scheme::monomorphic(Type::func(
            Type::num(),
            Type::func(Type::num(), Type::bool()),
        ));
        let num_predicate = Scheme::monomorphic(Type::func(Type::num(), Type::bool()));
        let num_unary = Scheme::monomorphic(Type::func(Type::num(), Type::num()));

        Self::new()
            .define("add", num_binop.clone(), curried(|a, b| Value::Num(a + b)))
            .define("sub", num_binop.clone(), curried(|a, b| Value::Num(a - b)))
            .define("mul", num_binop.clone(), curried(|a, b| Value::Num(a * b)))
            .define("div", num_binop, curried(|a, b| Value::Num(a / b)))
            .define("eq", num_compare.clone(), curried(|a, b| Value::Bool(a == b)))
            .define("lt", num_compare.clone(), curried(|a, b| Value::Bool(a < b)))
            .define("le", num_compare, curried(|a, b| Value::Bool(a <= b)))
            .define(
                "not",
                Scheme::monomorphic(Type::func(Type::bool(), Type::bool())),
                |v| Ok(Value::Bool(!v.as_bool()?)),
            )
            .define("le0", num_predicate.clone(), |v| {
                Ok(Value::Bool(v.as_num()? <= 0.0))
            })
            .define("eq0", num_predicate, |v| Ok(Value::Bool(v.as_num()? == 0.0)))
            .define("decr", num_unary.clone(), |v| Ok(Value::Num(v.as_num()? - 1.0)))
            .define("incr", num_unary, |v| Ok(Value::Num(v.as_num()? + 1.0)))
    }
}

/// Lift a binary numeric operation into a native taking one argument at a time.
fn curried(
    op: impl Fn(f64, f64) -> Value + Copy + 'static,
) -> impl Fn(Value) -> Result<Value, RuntimeError> + 'static {
    move |first| {
        let a = first.as_num()?;
        Ok(Value::native(move |second| Ok(op(a, second.as_num()?))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call(builtins: &Builtins, name: &str, args: &[Value]) -> Result<Value, RuntimeError> {
        let env = Environment::new();
        let mut ctx = Context::empty();
        builtins.install(&env, &mut ctx);
        let mut value = env.lookup(name)?;
        for arg in args {
            value = value.apply(arg.clone())?;
        }
        Ok(value)
    }

    #[test]
    fn test_standard_arithmetic() {
        let std = Builtins::standard();
        let two = Value::Num(2.0);
        let three = Value::Num(3.0);

        assert_eq!(call(&std, "add", &[two.clone(), three.clone()]), Ok(Value::Num(5.0)));
        assert_eq!(call(&std, "sub", &[two.clone(), three.clone()]), Ok(Value::Num(-1.0)));
        assert_eq!(call(&std, "mul", &[two.clone(), three.clone()]), Ok(Value::Num(6.0)));
        assert_eq!(call(&std, "lt", &[two.clone(), three]), Ok(Value::Bool(true)));
        assert_eq!(call(&std, "incr", &[two.clone()]), Ok(Value::Num(3.0)));
        assert_eq!(call(&std, "decr", &[two]), Ok(Value::Num(1.0)));
    }

    #[test]
    fn test_division_by_zero_is_infinite() {
        let result = call(
            &Builtins::standard(),
            "div",
            &[Value::Num(1.0), Value::Num(0.0)],
        );
        assert_eq!(result, Ok(Value::Num(f64::INFINITY)));
    }

    #[test]
    fn test_wrong_argument_kind() {
        let result = call(&Builtins::standard(), "add", &[Value::Bool(true)]);
        assert!(matches!(result, Err(RuntimeError::TypeMismatch { .. })));
    }

    #[test]
    fn test_install_populates_context() {
        let env = Environment::new();
        let mut ctx = Context::empty();
        let std = Builtins::standard();
        std.install(&env, &mut ctx);

        assert_eq!(ctx.len(), std.len());
        for name in std.names() {
            assert!(ctx.contains(name));
            assert!(env.lookup(name).is_ok());
        }
        assert_eq!(ctx.get("not").map(ToString::to_string), Some("Bool -> Bool".to_string()));
    }

    #[test]
    fn test_redefinition_replaces() {
        let builtins = Builtins::new()
            .define("k", Scheme::monomorphic(Type::num()), Ok)
            .define("k", Scheme::monomorphic(Type::bool()), Ok);

        assert_eq!(builtins.len(), 1);
        assert_eq!(builtins.scheme("k"), Some(&Scheme::monomorphic(Type::bool())));
    }
}
