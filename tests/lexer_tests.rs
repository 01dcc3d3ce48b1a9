use hindley::lexer::Token;

#[test]
fn lex_keywords() {
    let tokens = Token::lex("def let in if then else").unwrap();
    assert_eq!(tokens.len(), 6);
    assert!(matches!(tokens[0], Token::Def(_)));
    assert!(matches!(tokens[1], Token::Let(_)));
    assert!(matches!(tokens[2], Token::In(_)));
    assert!(matches!(tokens[3], Token::If(_)));
    assert!(matches!(tokens[4], Token::Then(_)));
    assert!(matches!(tokens[5], Token::Else(_)));
}

#[test]
fn lex_booleans() {
    let tokens = Token::lex("True False").unwrap();
    assert_eq!(tokens.len(), 2);
    assert!(matches!(tokens[0], Token::True(_)));
    assert!(matches!(tokens[1], Token::False(_)));
}

#[test]
fn lex_identifiers() {
    let tokens = Token::lex("foo bar2 count1").unwrap();
    assert_eq!(tokens.len(), 3);
    assert!(matches!(&tokens[0], Token::Ident(i) if i.value == "foo"));
    assert!(matches!(&tokens[1], Token::Ident(i) if i.value == "bar2"));
    assert!(matches!(&tokens[2], Token::Ident(i) if i.value == "count1"));
}

#[test]
fn lex_identifier_with_keyword_prefix() {
    let tokens = Token::lex("incr define").unwrap();
    assert_eq!(tokens.len(), 2);
    assert!(matches!(&tokens[0], Token::Ident(i) if i.value == "incr"));
    assert!(matches!(&tokens[1], Token::Ident(i) if i.value == "define"));
}

#[test]
fn lex_numbers() {
    let tokens = Token::lex("42 0 3.25").unwrap();
    assert_eq!(tokens.len(), 3);
    assert!(matches!(&tokens[0], Token::Number(n) if n.value == "42"));
    assert!(matches!(&tokens[1], Token::Number(n) if n.value == "0"));
    assert!(matches!(&tokens[2], Token::Number(n) if n.value == "3.25"));
}

#[test]
fn lex_punctuation() {
    let tokens = Token::lex("= \\ ( )").unwrap();
    assert_eq!(tokens.len(), 4);
    assert!(matches!(tokens[0], Token::Equals(_)));
    assert!(matches!(tokens[1], Token::Backslash(_)));
    assert!(matches!(tokens[2], Token::LParen(_)));
    assert!(matches!(tokens[3], Token::RParen(_)));
}

#[test]
fn lex_binding_across_lines() {
    let tokens = Token::lex("def main =\n  \\x\n    x").unwrap();
    assert_eq!(tokens.len(), 6);
    assert!(matches!(tokens[0], Token::Def(_)));
    assert!(matches!(&tokens[1], Token::Ident(i) if i.value == "main"));
    assert!(matches!(tokens[2], Token::Equals(_)));
    assert!(matches!(tokens[3], Token::Backslash(_)));
}

#[test]
fn describe_tokens() {
    let tokens = Token::lex("x 1 then").unwrap();
    assert_eq!(tokens[0].describe(), "identifier 'x'");
    assert_eq!(tokens[1].describe(), "number '1'");
    assert_eq!(tokens[2].describe(), "'then'");
}
