//! Runtime limits for the calculator pipeline.
//!
//! Every deque built while tokenizing and parsing a line is bounded by the
//! same capacity, and input lines are rejected above a fixed length.

pub mod config;
