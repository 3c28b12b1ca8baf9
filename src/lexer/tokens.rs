use std::fmt::Display;

use crate::Span;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Literal,

    Plus,
    Minus,
    Mul,
    Div,
    Neg, // unary minus

    Open,
    Close,

    End,
    Error,
}

impl TokenKind {
    /// Source text of the token, empty for literals and synthetic tokens.
    pub fn symbol(&self) -> &'static str {
        match self {
            TokenKind::Plus => "+",
            TokenKind::Minus | TokenKind::Neg => "-",
            TokenKind::Mul => "*",
            TokenKind::Div => "/",
            TokenKind::Open => "(",
            TokenKind::Close => ")",
            TokenKind::Literal | TokenKind::End | TokenKind::Error => "",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Only meaningful for `TokenKind::Literal`.
    pub value: i64,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.kind == TokenKind::Literal {
            write!(f, "{}({})", self.kind, self.value)
        } else {
            write!(f, "{}", self.kind)
        }
    }
}

impl Token {
    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    /// Whether a `-` following this token negates instead of subtracting.
    pub fn expects_operand(&self) -> bool {
        self.is_one_of_many(&[
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Mul,
            TokenKind::Div,
            TokenKind::Neg,
            TokenKind::Open,
        ])
    }
}
