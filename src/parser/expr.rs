use crate::{
    ast::ast::{BinaryOp, Expr, UnaryOp},
    deque::deque::BoundedDeque,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::Token,
};

use super::lookups::arity;

/// Combines `operator` with the operands on top of the stack into a new node.
///
/// The right operand of a binary operator is the most recently pushed one.
/// The operand stack is left untouched when there are too few operands or
/// the token is not an operator.
pub fn reduce_operator(operator: Token, operands: &mut BoundedDeque<Expr>) -> Result<Expr, Error> {
    let needed = arity(operator.kind);

    if operands.len() < needed {
        return Err(Error::new(
            ErrorImpl::MalformedExpression {
                message: format!("operator `{}` is missing an operand", operator.kind.symbol()),
            },
            operator.span.start,
        ));
    }

    if let Some(op) = UnaryOp::from_token_kind(operator.kind) {
        let operand = pop_operand(operands, &operator)?;
        return Ok(Expr::unary(op, operand, operator.span));
    }

    match BinaryOp::from_token_kind(operator.kind) {
        Some(op) => {
            let right = pop_operand(operands, &operator)?;
            let left = pop_operand(operands, &operator)?;
            Ok(Expr::binary(op, left, right))
        }
        None => Err(Error::new(
            ErrorImpl::MalformedExpression {
                message: format!("`{}` is not an operator", operator),
            },
            operator.span.start,
        )),
    }
}

fn pop_operand(operands: &mut BoundedDeque<Expr>, operator: &Token) -> Result<Expr, Error> {
    operands
        .pop_back()
        .map_err(|e| Error::new(e.into(), operator.span.start))
}
