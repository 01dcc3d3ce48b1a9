use std::fmt;
use std::rc::Rc;

/// Expression tree produced by the parser.
///
/// Trees are immutable once built; the type checker and the evaluator only
/// ever borrow them. Lambda bodies are shared so that closures can hold on to
/// them without copying.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Var(String),
    Num(f64),
    Bool(bool),
    If(Box<Expr>, Box<Expr>, Box<Expr>),
    Let(String, Box<Expr>, Box<Expr>),
    Lambda(String, Rc<Expr>),
    App(Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn var(name: impl Into<String>) -> Self {
        Expr::Var(name.into())
    }

    pub fn num(value: f64) -> Self {
        Expr::Num(value)
    }

    pub fn bool(value: bool) -> Self {
        Expr::Bool(value)
    }

    pub fn if_(condition: Expr, then_branch: Expr, else_branch: Expr) -> Self {
        Expr::If(
            Box::new(condition),
            Box::new(then_branch),
            Box::new(else_branch),
        )
    }

    pub fn let_(name: impl Into<String>, definition: Expr, body: Expr) -> Self {
        Expr::Let(name.into(), Box::new(definition), Box::new(body))
    }

    pub fn lambda(param: impl Into<String>, body: Expr) -> Self {
        Expr::Lambda(param.into(), Rc::new(body))
    }

    pub fn app(func: Expr, arg: Expr) -> Self {
        Expr::App(Box::new(func), Box::new(arg))
    }

    /// Left-nested application of `func` to every argument in turn.
    pub fn apply_all(func: Expr, args: impl IntoIterator<Item = Expr>) -> Self {
        args.into_iter().fold(func, Expr::app)
    }

    fn is_atomic(&self) -> bool {
        matches!(self, Expr::Var(_) | Expr::Num(_) | Expr::Bool(_))
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Var(name) => write!(f, "{}", name),
            Expr::Num(value) => write!(f, "{}", value),
            Expr::Bool(true) => write!(f, "True"),
            Expr::Bool(false) => write!(f, "False"),
            Expr::If(condition, then_branch, else_branch) => write!(
                f,
                "if {} then {} else {}",
                condition, then_branch, else_branch
            ),
            Expr::Let(name, definition, body) => {
                write!(f, "let {} = {} in {}", name, definition, body)
            }
            Expr::Lambda(param, body) => write!(f, "\\{}. {}", param, body),
            Expr::App(func, arg) => {
                match func.as_ref() {
                    Expr::App(_, _) => write!(f, "{}", func)?,
                    inner if inner.is_atomic() => write!(f, "{}", func)?,
                    _ => write!(f, "({})", func)?,
                }
                if arg.is_atomic() {
                    write!(f, " {}", arg)
                } else {
                    write!(f, " ({})", arg)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_application_chain() {
        let expr = Expr::apply_all(Expr::var("add"), [Expr::num(1.0), Expr::num(2.5)]);
        assert_eq!(expr.to_string(), "add 1 2.5");
    }

    #[test]
    fn test_display_nested_argument() {
        let expr = Expr::app(
            Expr::var("count"),
            Expr::app(Expr::var("decr"), Expr::var("n")),
        );
        assert_eq!(expr.to_string(), "count (decr n)");
    }

    #[test]
    fn test_display_lambda_in_function_position() {
        let expr = Expr::app(Expr::lambda("x", Expr::var("x")), Expr::bool(true));
        assert_eq!(expr.to_string(), "(\\x. x) True");
    }

    #[test]
    fn test_display_let_and_if() {
        let expr = Expr::let_(
            "x",
            Expr::num(1.0),
            Expr::if_(Expr::bool(false), Expr::var("x"), Expr::num(0.0)),
        );
        assert_eq!(expr.to_string(), "let x = 1 in if False then x else 0");
    }
}
