//! Error types and error handling for the calculator.
//!
//! This module defines the error types used throughout the pipeline.
//! It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for tokenizing, parsing and evaluation
//! - Helpful error messages and suggestions

pub mod errors;

#[cfg(test)]
mod tests;
