//! Parser module for building the expression tree.
//!
//! This module contains the precedence controller that turns a queue of
//! tokens into an expression tree. It drives two bounded stacks:
//!
//! - an operator stack, anchored by an `End` sentinel
//! - an operand stack of finished sub-expressions
//!
//! Incoming operators are compared against the top of the operator stack
//! by binding power; pending operators that bind at least as tightly are
//! reduced into tree nodes first.

pub mod expr;
pub mod lookups;
pub mod parser;
