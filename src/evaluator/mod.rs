//! Reduces an expression tree to a signed 64-bit value.

pub mod evaluator;

#[cfg(test)]
mod tests;
