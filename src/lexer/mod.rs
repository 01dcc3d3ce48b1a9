use lachs::Span;

#[lachs::token]
pub enum Token {
    #[terminal("def")]
    Def,
    #[terminal("let")]
    Let,
    #[terminal("in")]
    In,
    #[terminal("if")]
    If,
    #[terminal("then")]
    Then,
    #[terminal("else")]
    Else,
    #[terminal("True")]
    True,
    #[terminal("False")]
    False,
    #[literal("[a-zA-Z][a-zA-Z0-9]*")]
    Ident,
    #[literal(r"[0-9]+(\.[0-9]+)?")]
    Number,
    #[terminal("=")]
    Equals,
    #[terminal("\\")]
    Backslash,
    #[terminal("(")]
    LParen,
    #[terminal(")")]
    RParen,
}

impl Token {
    pub fn pos(&self) -> Span {
        match self {
            Token::Def(inner) => inner.position.clone(),
            Token::Let(inner) => inner.position.clone(),
            Token::In(inner) => inner.position.clone(),
            Token::If(inner) => inner.position.clone(),
            Token::Then(inner) => inner.position.clone(),
            Token::Else(inner) => inner.position.clone(),
            Token::True(inner) => inner.position.clone(),
            Token::False(inner) => inner.position.clone(),
            Token::Ident(inner) => inner.position.clone(),
            Token::Number(inner) => inner.position.clone(),
            Token::Equals(inner) => inner.position.clone(),
            Token::Backslash(inner) => inner.position.clone(),
            Token::LParen(inner) => inner.position.clone(),
            Token::RParen(inner) => inner.position.clone(),
        }
    }

    /// Returns a human-readable description of the token
    pub fn describe(&self) -> String {
        match self {
            Token::Def(_) => "'def'".to_string(),
            Token::Let(_) => "'let'".to_string(),
            Token::In(_) => "'in'".to_string(),
            Token::If(_) => "'if'".to_string(),
            Token::Then(_) => "'then'".to_string(),
            Token::Else(_) => "'else'".to_string(),
            Token::True(_) => "'True'".to_string(),
            Token::False(_) => "'False'".to_string(),
            Token::Ident(inner) => format!("identifier '{}'", inner.value),
            Token::Number(inner) => format!("number '{}'", inner.value),
            Token::Equals(_) => "'='".to_string(),
            Token::Backslash(_) => "'\\'".to_string(),
            Token::LParen(_) => "'('".to_string(),
            Token::RParen(_) => "')'".to_string(),
        }
    }
}
