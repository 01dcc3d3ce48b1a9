use hindley::ast::{Binding, Expr};
use hindley::lexer::Token;
use hindley::parser::{ParseError, ParseState, expression, parse};

fn parse_bindings(input: &str) -> Vec<Binding> {
    let tokens = Token::lex(input).expect("lexing failed");
    let mut state = ParseState::new(tokens);
    match parse(&mut state) {
        Ok(bindings) => bindings,
        Err(err) => panic!("parsing failed: {}", err),
    }
}

fn parse_error(input: &str) -> ParseError {
    let tokens = Token::lex(input).expect("lexing failed");
    let mut state = ParseState::new(tokens);
    parse(&mut state).expect_err("parsing should fail")
}

fn parse_expr(input: &str) -> Expr {
    use hindley::parser::Parser;

    let tokens = Token::lex(input).expect("lexing failed");
    let mut state = ParseState::new(tokens);
    let expr = expression().parse(&mut state).expect("parsing failed");
    assert!(!state.has_next(), "input left over after expression");
    expr
}

#[test]
fn parse_empty_program() {
    assert!(parse_bindings("").is_empty());
}

#[test]
fn parse_single_binding() {
    let bindings = parse_bindings("def main = 42");
    assert_eq!(bindings, vec![Binding::new("main", Expr::num(42.0))]);
}

#[test]
fn parse_multiple_bindings_keep_order() {
    let bindings = parse_bindings("def one = 1\ndef two = 2\ndef main = True");
    let names: Vec<_> = bindings.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["one", "two", "main"]);
    assert_eq!(bindings[2].expr, Expr::bool(true));
}

#[test]
fn parse_application_is_left_associative() {
    assert_eq!(
        parse_expr("f x y"),
        Expr::app(
            Expr::app(Expr::var("f"), Expr::var("x")),
            Expr::var("y")
        )
    );
}

#[test]
fn parse_parenthesised_argument() {
    assert_eq!(
        parse_expr("f (g x)"),
        Expr::app(Expr::var("f"), Expr::app(Expr::var("g"), Expr::var("x")))
    );
}

#[test]
fn parse_lambda_body_extends_right() {
    assert_eq!(
        parse_expr("\\x \\y add x y"),
        Expr::lambda(
            "x",
            Expr::lambda("y", Expr::apply_all(Expr::var("add"), [Expr::var("x"), Expr::var("y")]))
        )
    );
}

#[test]
fn parse_trailing_lambda_argument() {
    assert_eq!(
        parse_expr("map xs \\y y"),
        Expr::apply_all(
            Expr::var("map"),
            [Expr::var("xs"), Expr::lambda("y", Expr::var("y"))]
        )
    );
}

#[test]
fn parse_if_expression() {
    assert_eq!(
        parse_expr("if le0 n then 0 else n"),
        Expr::if_(
            Expr::app(Expr::var("le0"), Expr::var("n")),
            Expr::num(0.0),
            Expr::var("n")
        )
    );
}

#[test]
fn parse_let_expression() {
    assert_eq!(
        parse_expr("let id = \\x x in id 1"),
        Expr::let_(
            "id",
            Expr::lambda("x", Expr::var("x")),
            Expr::app(Expr::var("id"), Expr::num(1.0))
        )
    );
}

#[test]
fn parse_nested_let_and_if() {
    let expr = parse_expr("let b = True in if b then let x = 1 in x else 2");
    assert_eq!(
        expr,
        Expr::let_(
            "b",
            Expr::bool(true),
            Expr::if_(
                Expr::var("b"),
                Expr::let_("x", Expr::num(1.0), Expr::var("x")),
                Expr::num(2.0)
            )
        )
    );
}

#[test]
fn parse_fractional_number() {
    assert_eq!(parse_expr("2.5"), Expr::num(2.5));
}

#[test]
fn parse_then_display() {
    let expr = parse_expr("let f = \\x add x 1 in f (f 2)");
    assert_eq!(expr.to_string(), "let f = \\x. add x 1 in f (f 2)");
}

#[test]
fn parse_error_missing_equals() {
    let err = parse_error("def main 42");
    assert!(err.found.is_some());
    assert!(err.span.is_some());
}

#[test]
fn parse_error_unclosed_paren() {
    let err = parse_error("def main = (f x");
    assert!(err.message.contains("unexpected end of input"), "{}", err);
}

#[test]
fn parse_error_dangling_keyword() {
    let err = parse_error("def main = if True then 1");
    assert!(err.expected.iter().any(|e| e.contains("else")), "{:?}", err.expected);
}

#[test]
fn parse_does_not_check_duplicates() {
    let bindings = parse_bindings("def a = 1\ndef a = 2");
    assert_eq!(bindings.len(), 2);
}
