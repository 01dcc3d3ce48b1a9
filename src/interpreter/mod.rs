mod error;
mod eval;
mod scope;
mod value;

pub use error::RuntimeError;
pub use eval::evaluate;
pub use scope::Environment;
pub use value::{Closure, Native, Value};

use tracing::debug;

use crate::ast::Program;

/// Name of the binding a program starts from
pub const ENTRY: &str = "main";

/// Evaluate a program starting from its `main` binding.
pub fn interpret(program: &Program, env: &Environment<Value>) -> Result<Value, RuntimeError> {
    interpret_entry(program, env, ENTRY)
}

/// Evaluate a program starting from the binding called `entry`.
///
/// Every other binding is evaluated eagerly, in program order, and defined
/// into `env` itself, so functions can refer to bindings that come after
/// them. A non-function binding that forces a later binding fails with
/// [`RuntimeError::Lookup`].
pub fn interpret_entry(
    program: &Program,
    env: &Environment<Value>,
    entry: &str,
) -> Result<Value, RuntimeError> {
    let main = program.get(entry).ok_or_else(|| RuntimeError::MissingEntry {
        name: entry.to_string(),
    })?;

    for binding in program.bindings() {
        if binding.name == entry {
            continue;
        }
        let value = binding.expr.eval(env)?;
        debug!("defined {} = {}", binding.name, value);
        env.define(binding.name.clone(), value);
    }

    debug!("evaluating entry binding {}", entry);
    main.eval(env)
}
