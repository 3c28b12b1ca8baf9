//! Unit tests for the evaluator.

use super::evaluator::evaluate;
use crate::{
    ast::ast::{BinaryOp, Expr, UnaryOp},
    errors::errors::ErrorImpl,
    Position, Span,
};

fn span(start: u32) -> Span {
    Span {
        start: Position(start),
        end: Position(start + 1),
    }
}

fn lit(value: i64, at: u32) -> Expr {
    Expr::literal(value, span(at))
}

#[test]
fn test_evaluate_literal() {
    assert_eq!(evaluate(&lit(42, 0)), Ok(42));
}

#[test]
fn test_evaluate_negation() {
    let expr = Expr::unary(UnaryOp::Neg, lit(5, 1), span(0));
    assert_eq!(evaluate(&expr), Ok(-5));

    let twice = Expr::unary(UnaryOp::Neg, expr, span(0));
    assert_eq!(evaluate(&twice), Ok(5));
}

#[test]
fn test_evaluate_binary_operators() {
    let cases = [
        (BinaryOp::Plus, 7, 3, 10),
        (BinaryOp::Minus, 7, 3, 4),
        (BinaryOp::Mul, 7, 3, 21),
        (BinaryOp::Div, 7, 3, 2),
        (BinaryOp::Div, -7, 3, -2),
        (BinaryOp::Div, 7, -3, -2),
    ];

    for (op, left, right, expected) in cases {
        let expr = Expr::binary(op, lit(left, 0), lit(right, 2));
        assert_eq!(evaluate(&expr), Ok(expected), "{:?} {} {}", op, left, right);
    }
}

#[test]
fn test_nested_tree() {
    // ((1+2)*3)-4
    let sum = Expr::binary(BinaryOp::Plus, lit(1, 2), lit(2, 4));
    let product = Expr::binary(BinaryOp::Mul, sum, lit(3, 7));
    let expr = Expr::binary(BinaryOp::Minus, product, lit(4, 9));

    assert_eq!(evaluate(&expr), Ok(5));
}

#[test]
fn test_division_by_zero_points_at_divisor() {
    let divisor = Expr::binary(BinaryOp::Minus, lit(2, 4), lit(2, 6));
    let expr = Expr::binary(BinaryOp::Div, lit(5, 0), divisor);
    let error = evaluate(&expr).unwrap_err();

    assert_eq!(error.get_kind(), &ErrorImpl::DivisionByZero);
    assert_eq!(error.get_position(), &Position(4));
}

#[test]
fn test_overflow_wraps() {
    let expr = Expr::binary(BinaryOp::Plus, lit(i64::MAX, 0), lit(1, 2));
    assert_eq!(evaluate(&expr), Ok(i64::MIN));

    let expr = Expr::unary(UnaryOp::Neg, lit(i64::MIN, 1), span(0));
    assert_eq!(evaluate(&expr), Ok(i64::MIN));

    let expr = Expr::binary(BinaryOp::Div, lit(i64::MIN, 0), lit(-1, 2));
    assert_eq!(evaluate(&expr), Ok(i64::MIN));
}

#[test]
fn test_evaluation_is_repeatable() {
    let expr = Expr::binary(
        BinaryOp::Mul,
        Expr::unary(UnaryOp::Neg, lit(6, 1), span(0)),
        lit(7, 3),
    );

    assert_eq!(evaluate(&expr), evaluate(&expr));
    assert_eq!(evaluate(&expr), Ok(-42));
}
