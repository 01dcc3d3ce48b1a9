//! Tree-walking evaluation of [`Expr`].
//!
//! Evaluation is strict and single-threaded. Lambdas capture a fresh child of
//! the current scope, and [`Value::apply`] binds the argument into that
//! captured scope before evaluating the body.

use std::rc::Rc;

use crate::ast::Expr;

use super::error::RuntimeError;
use super::scope::Environment;
use super::value::{Closure, Value};

impl Expr {
    pub fn eval(&self, env: &Environment<Value>) -> Result<Value, RuntimeError> {
        match self {
            Expr::Num(value) => Ok(Value::Num(*value)),
            Expr::Bool(value) => Ok(Value::Bool(*value)),
            Expr::Var(name) => env.lookup(name),
            Expr::If(condition, then_branch, else_branch) => match condition.eval(env)? {
                Value::Bool(true) => then_branch.eval(env),
                Value::Bool(false) => else_branch.eval(env),
                other => Err(RuntimeError::NotABool {
                    found: other.to_string(),
                }),
            },
            Expr::Let(name, definition, body) => {
                // the definition cannot see its own name
                let value = definition.eval(env)?;
                let local = env.local();
                local.define(name.clone(), value);
                body.eval(&local)
            }
            Expr::Lambda(param, body) => Ok(Value::Function(Rc::new(Closure {
                param: param.clone(),
                body: Rc::clone(body),
                env: env.local(),
            }))),
            Expr::App(func, arg) => {
                let func = func.eval(env)?;
                if !func.is_callable() {
                    return Err(RuntimeError::NotCallable {
                        found: func.to_string(),
                    });
                }
                let arg = arg.eval(env)?;
                func.apply(arg)
            }
        }
    }
}

/// Evaluate `expr` in `env`.
pub fn evaluate(expr: &Expr, env: &Environment<Value>) -> Result<Value, RuntimeError> {
    expr.eval(env)
}
