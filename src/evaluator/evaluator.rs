use crate::{
    ast::ast::{BinaryExpr, BinaryOp, Expr, UnaryExpr, UnaryOp},
    errors::errors::{Error, ErrorImpl},
};

/// Evaluates `expr` with two's-complement wraparound on overflow.
///
/// Division truncates toward zero and fails with `DivisionByZero` when the
/// divisor evaluates to 0.
pub fn evaluate(expr: &Expr) -> Result<i64, Error> {
    match expr {
        Expr::Literal(literal) => Ok(literal.value),
        Expr::Unary(unary) => evaluate_unary(unary),
        Expr::Binary(binary) => evaluate_binary(binary),
    }
}

fn evaluate_unary(unary: &UnaryExpr) -> Result<i64, Error> {
    let operand = evaluate(&unary.operand)?;

    match unary.operator {
        UnaryOp::Neg => Ok(operand.wrapping_neg()),
    }
}

fn evaluate_binary(binary: &BinaryExpr) -> Result<i64, Error> {
    let left = evaluate(&binary.left)?;
    let right = evaluate(&binary.right)?;

    match binary.operator {
        BinaryOp::Plus => Ok(left.wrapping_add(right)),
        BinaryOp::Minus => Ok(left.wrapping_sub(right)),
        BinaryOp::Mul => Ok(left.wrapping_mul(right)),
        BinaryOp::Div => {
            if right == 0 {
                return Err(Error::new(
                    ErrorImpl::DivisionByZero,
                    binary.right.get_span().start,
                ));
            }

            // i64::MIN / -1 wraps back to i64::MIN
            Ok(left.wrapping_div(right))
        }
    }
}
