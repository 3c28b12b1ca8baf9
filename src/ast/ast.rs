use std::fmt::Display;

use crate::{lexer::tokens::TokenKind, Span};

/// Binary Operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Plus,
    Minus,
    Mul,
    Div,
}

impl BinaryOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Plus => "+",
            BinaryOp::Minus => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
        }
    }

    pub fn from_token_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(BinaryOp::Plus),
            TokenKind::Minus => Some(BinaryOp::Minus),
            TokenKind::Mul => Some(BinaryOp::Mul),
            TokenKind::Div => Some(BinaryOp::Div),
            _ => None,
        }
    }
}

/// Unary Operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Neg,
}

impl UnaryOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            UnaryOp::Neg => "-",
        }
    }

    pub fn from_token_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Neg => Some(UnaryOp::Neg),
            _ => None,
        }
    }
}

/// Literal Expression
/// Represents an integer literal in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralExpr {
    pub value: i64,
    pub span: Span,
}

/// Unary Expression
/// Represents a prefix operator applied to one sub-expression.
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub operator: UnaryOp,
    pub operand: Box<Expr>,
    pub span: Span,
    /// Levels from this node down to its deepest literal
    pub depth: usize,
}

/// Binary Expression
/// Represents an arithmetic operation between two sub-expressions.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: BinaryOp,
    pub right: Box<Expr>,
    pub span: Span,
    pub depth: usize,
}

/// A node of the expression tree. Every node owns its children.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(LiteralExpr),
    Unary(UnaryExpr),
    Binary(BinaryExpr),
}

impl Expr {
    pub fn literal(value: i64, span: Span) -> Self {
        Expr::Literal(LiteralExpr { value, span })
    }

    /// `operator_span` is the span of the operator token; the node spans
    /// from it to the end of the operand.
    pub fn unary(operator: UnaryOp, operand: Expr, operator_span: Span) -> Self {
        let span = Span {
            start: operator_span.start,
            end: operand.get_span().end,
        };

        let depth = operand.depth() + 1;

        Expr::Unary(UnaryExpr {
            operator,
            operand: Box::new(operand),
            span,
            depth,
        })
    }

    pub fn binary(operator: BinaryOp, left: Expr, right: Expr) -> Self {
        let span = Span {
            start: left.get_span().start,
            end: right.get_span().end,
        };

        let depth = left.depth().max(right.depth()) + 1;

        Expr::Binary(BinaryExpr {
            left: Box::new(left),
            operator,
            right: Box::new(right),
            span,
            depth,
        })
    }

    /// Number of nodes on the longest path to a literal, 1 for a literal.
    pub fn depth(&self) -> usize {
        match self {
            Expr::Literal(_) => 1,
            Expr::Unary(unary) => unary.depth,
            Expr::Binary(binary) => binary.depth,
        }
    }

    /// Widens the node's span to `span`, used to cover the parentheses
    /// around a grouped sub-expression.
    pub fn grouped(mut self, span: Span) -> Self {
        match &mut self {
            Expr::Literal(literal) => literal.span = span,
            Expr::Unary(unary) => unary.span = span,
            Expr::Binary(binary) => binary.span = span,
        }
        self
    }

    pub fn get_span(&self) -> &Span {
        match self {
            Expr::Literal(literal) => &literal.span,
            Expr::Unary(unary) => &unary.span,
            Expr::Binary(binary) => &binary.span,
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", super::printer::render_infix(self))
    }
}
