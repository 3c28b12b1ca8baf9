use crate::lexer::tokens::TokenKind;

#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Additive,
    Multiplicative,
    Primary,
}

/// Priority of a token when it sits on, or is compared against, the
/// operator stack. Parentheses and the sentinel bind weakest so they are
/// never reduced by an incoming operator.
pub fn binding_power(kind: TokenKind) -> BindingPower {
    match kind {
        TokenKind::Plus | TokenKind::Minus => BindingPower::Additive,
        TokenKind::Mul | TokenKind::Div | TokenKind::Neg => BindingPower::Multiplicative,
        TokenKind::Open | TokenKind::Close | TokenKind::End => BindingPower::Default,
        TokenKind::Literal | TokenKind::Error => BindingPower::Primary,
    }
}

/// Number of operands the operator consumes, zero for non-operators.
pub fn arity(kind: TokenKind) -> usize {
    match kind {
        TokenKind::Neg => 1,
        TokenKind::Plus | TokenKind::Minus | TokenKind::Mul | TokenKind::Div => 2,
        TokenKind::Literal
        | TokenKind::Open
        | TokenKind::Close
        | TokenKind::End
        | TokenKind::Error => 0,
    }
}
