//! Lexical analysis module for the calculator.
//!
//! This module contains the lexer (tokenizer) that converts an input line
//! into a queue of tokens for parsing. It handles:
//!
//! - Tokenization of the line using regex patterns
//! - Recognition of integer literals, operators and parentheses
//! - Telling unary negation apart from binary subtraction
//! - Token position tracking for error reporting

pub mod lexer;
pub mod tokens;
