use std::fmt::Display;

use thiserror::Error;

use crate::{deque::deque::DequeError, Position};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnmatchedParen => "UnmatchedParen",
            ErrorImpl::MalformedExpression { .. } => "MalformedExpression",
            ErrorImpl::StackOverflow { .. } => "StackOverflow",
            ErrorImpl::StackUnderflow => "StackUnderflow",
            ErrorImpl::DivisionByZero => "DivisionByZero",
            ErrorImpl::InputTooLong { .. } => "InputTooLong",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnmatchedParen => {
                ErrorTip::Suggestion(String::from("every `(` needs a matching `)`"))
            }
            ErrorImpl::MalformedExpression { message } => ErrorTip::Suggestion(message.clone()),
            ErrorImpl::StackOverflow { capacity } => ErrorTip::Suggestion(format!(
                "Expression needs more than {} slots, try raising the capacity",
                capacity
            )),
            ErrorImpl::StackUnderflow => ErrorTip::None,
            ErrorImpl::DivisionByZero => {
                ErrorTip::Suggestion(String::from("The divisor evaluates to zero"))
            }
            ErrorImpl::InputTooLong { length, limit } => ErrorTip::Suggestion(format!(
                "Line is {} bytes long, the limit is {}",
                length, limit
            )),
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "Expression nests deeper than {} levels",
                limit
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at position {}", self.internal_error, self.position.0)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unmatched parenthesis")]
    UnmatchedParen,
    #[error("malformed expression: {message}")]
    MalformedExpression { message: String },
    #[error("stack overflow: capacity {capacity} exceeded")]
    StackOverflow { capacity: usize },
    #[error("stack underflow")]
    StackUnderflow,
    #[error("division by zero")]
    DivisionByZero,
    #[error("input too long: {length} bytes, limit {limit}")]
    InputTooLong { length: usize, limit: usize },
    #[error("expression nests deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}

impl From<DequeError> for ErrorImpl {
    fn from(error: DequeError) -> Self {
        match error {
            DequeError::Overflow { capacity } => ErrorImpl::StackOverflow { capacity },
            DequeError::Underflow => ErrorImpl::StackUnderflow,
        }
    }
}
