//! Integration tests for the full pipeline.
//!
//! These tests drive a line of text through tokenizing, parsing and
//! evaluation via the public `calculate` entry point.

use llp::{
    calculate,
    config::config::Config,
    config::config::DEFAULT_MAX_DEPTH,
    errors::errors::{Error, ErrorImpl},
    evaluator::evaluator::evaluate,
    parse_str, Position,
};

fn value_of(source: &str) -> Result<i64, Error> {
    calculate(source, &Config::default()).map(|calculation| calculation.value)
}

#[test]
fn test_simple_addition() {
    assert_eq!(value_of("1+2"), Ok(3));
}

#[test]
fn test_parenthesized_product() {
    assert_eq!(value_of("2*(3+4)"), Ok(14));
}

#[test]
fn test_leading_negation() {
    assert_eq!(value_of("-5+3"), Ok(-2));
}

#[test]
fn test_subtraction_is_left_associative() {
    assert_eq!(value_of("10-2-3"), Ok(5));
    assert_eq!(value_of("100/10/5"), Ok(2));
}

#[test]
fn test_precedence_over_associativity() {
    assert_eq!(value_of("2+3*4"), Ok(14));
    assert_eq!(value_of("1-2*3+4"), Ok(-1));
    assert_eq!(value_of("20/4-2*3"), Ok(-1));
}

#[test]
fn test_nested_expression() {
    assert_eq!(value_of("((1+2)*3)-4"), Ok(5));
    assert_eq!(value_of("-(2*(3-(4/(1+1))))"), Ok(-2));
}

#[test]
fn test_whitespace_is_ignored() {
    assert_eq!(value_of("  7 *\t( 1 + 1 )  "), Ok(14));
}

#[test]
fn test_truncating_division() {
    assert_eq!(value_of("7/2"), Ok(3));
    assert_eq!(value_of("-7/2"), Ok(-3));
}

#[test]
fn test_unmatched_paren() {
    let error = value_of("(1+2").unwrap_err();
    assert_eq!(error.get_kind(), &ErrorImpl::UnmatchedParen);
}

#[test]
fn test_division_by_zero() {
    let error = value_of("5/0").unwrap_err();
    assert_eq!(error.get_kind(), &ErrorImpl::DivisionByZero);
    assert_eq!(error.get_position(), &Position(2));

    // A parenthesized divisor is reported at its `(`.
    let error = value_of("5/(3-3)").unwrap_err();
    assert_eq!(error.get_kind(), &ErrorImpl::DivisionByZero);
    assert_eq!(error.get_position(), &Position(2));

    let error = value_of("1+5/(3-3)").unwrap_err();
    assert_eq!(error.get_kind(), &ErrorImpl::DivisionByZero);
    assert_eq!(error.get_position(), &Position(4));
}

#[test]
fn test_illegal_character() {
    let error = value_of("2^3").unwrap_err();
    assert_eq!(
        error.get_kind(),
        &ErrorImpl::UnrecognisedToken {
            token: "^".to_string()
        }
    );
}

#[test]
fn test_small_capacity_overflows() {
    let config = Config::new(Some(3), None);
    let error = calculate("1+2+3", &config).unwrap_err();

    assert_eq!(error.get_kind(), &ErrorImpl::StackOverflow { capacity: 3 });
}

#[test]
fn test_longest_line_fits_default_capacity() {
    let source = "1".repeat(1024);
    assert!(calculate(&source, &Config::default()).is_ok());

    let source = format!("1{}", "+1".repeat(511));
    assert_eq!(value_of(&source), Ok(512));
}

#[test]
fn test_long_negation_chain_is_rejected() {
    let source = format!("{}1", "-".repeat(100_000));
    let config = Config::new(Some(100_010), Some(100_010));
    let error = calculate(&source, &config).unwrap_err();

    assert_eq!(
        error.get_kind(),
        &ErrorImpl::NestingTooDeep {
            limit: DEFAULT_MAX_DEPTH
        }
    );
}

#[test]
fn test_long_addition_chain_is_rejected() {
    let source = format!("1{}", "+1".repeat(3000));
    let config = Config::new(Some(6010), Some(6010));
    let error = calculate(&source, &config).unwrap_err();

    assert_eq!(
        error.get_kind(),
        &ErrorImpl::NestingTooDeep {
            limit: DEFAULT_MAX_DEPTH
        }
    );
    assert_eq!(error.get_position(), &Position(0));

    let source = format!("1{}", "+1".repeat(2000));
    assert_eq!(calculate(&source, &config).map(|c| c.value), Ok(2001));
}

#[test]
fn test_evaluation_is_deterministic() {
    let ast = parse_str("(3-8)*-(2+2)/3", &Config::default()).unwrap();
    assert_eq!(evaluate(&ast), evaluate(&ast));
    assert_eq!(evaluate(&ast), Ok(6));
}

#[test]
fn test_infix_rendering_round_trips() {
    let corpus = [
        "1+2",
        "2*(3+4)",
        "-5+3",
        "10-2-3",
        "2+3*4",
        "((1+2)*3)-4",
        "--7",
        "2*-3",
        "1 - -2",
        "-(1+2)*-(3-4)/2",
        "100/7/2-3*-(4+5)",
        "9223372036854775807+1",
    ];

    for source in corpus {
        let calculation = calculate(source, &Config::default()).unwrap();
        let rendered = calculation.infix();
        let reparsed = calculate(&rendered, &Config::default()).unwrap();

        assert_eq!(reparsed.value, calculation.value, "{} -> {}", source, rendered);
        assert_eq!(reparsed.infix(), rendered, "{} -> {}", source, rendered);
    }
}

#[test]
fn test_postfix_rendering() {
    let calculation = calculate("-(1+2)*3", &Config::default()).unwrap();
    assert_eq!(calculation.postfix(), "1 2 + - 3 *");
    assert_eq!(calculation.value, -9);
}
