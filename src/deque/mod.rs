//! Fixed-capacity double-ended queue.
//!
//! One generic container serves as the token queue (FIFO) as well as the
//! operator and operand stacks (LIFO). Pushing past the capacity is an
//! error; nothing is ever overwritten.

pub mod deque;
