#![allow(clippy::module_inception)]

use log::debug;

use crate::{
    ast::{
        ast::Expr,
        printer::{render_infix, render_postfix},
    },
    config::config::Config,
    errors::errors::{Error, ErrorImpl, ErrorTip},
    evaluator::evaluator::evaluate,
    lexer::lexer::tokenize,
    parser::parser::parse,
};

pub mod ast;
pub mod config;
pub mod deque;
pub mod errors;
pub mod evaluator;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// Byte offset into the input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// A parsed line together with the value it evaluates to.
#[derive(Debug, Clone)]
pub struct Calculation {
    pub ast: Expr,
    pub value: i64,
}

impl Calculation {
    /// Fully parenthesized infix form, e.g. `(1)+((2)*(3))`.
    pub fn infix(&self) -> String {
        render_infix(&self.ast)
    }

    /// Space separated postfix form, e.g. `1 2 3 * +`.
    pub fn postfix(&self) -> String {
        render_postfix(&self.ast)
    }
}

fn check_line_length(source: &str, config: &Config) -> Result<(), Error> {
    if source.len() > config.max_line_length {
        return Err(Error::new(
            ErrorImpl::InputTooLong {
                length: source.len(),
                limit: config.max_line_length,
            },
            Position(config.max_line_length as u32),
        ));
    }

    Ok(())
}

/// Tokenizes and parses a single line into its expression tree.
pub fn parse_str(source: &str, config: &Config) -> Result<Expr, Error> {
    check_line_length(source, config)?;

    let tokens = tokenize(source, config.capacity)?;
    parse(tokens, config)
}

/// Runs the whole pipeline on one line: tokenize, parse, evaluate.
pub fn calculate(source: &str, config: &Config) -> Result<Calculation, Error> {
    let ast = parse_str(source, config)?;
    let value = evaluate(&ast)?;

    debug!("{} = {}", source, value);

    Ok(Calculation { ast, value })
}

pub fn render_error(error: &Error, source: &str) -> String {
    /*
        Error: message (tip)
          |
        1 | 1 + # 2
          | ----^
    */

    let offset = error.get_position().0 as usize;
    let column = match source.get(..offset) {
        Some(prefix) => prefix.chars().count(),
        None => source.chars().count(),
    };

    let line_str = "1";
    let padding = line_str.len() + 2;
    let arrows = column + 1;

    let mut rendered = String::new();

    if let ErrorTip::None = error.get_tip() {
        rendered.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        rendered.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    rendered.push_str(&format!("{:>padding$}\n", "|"));
    rendered.push_str(&format!("{} | {}\n", line_str, source));
    rendered.push_str(&format!("{:>padding$} {:->arrows$}", "|", "^"));

    rendered
}
