use std::{collections::VecDeque, fmt::Display};

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DequeError {
    #[error("capacity of {capacity} elements exceeded")]
    Overflow { capacity: usize },
    #[error("no elements left")]
    Underflow,
}

#[derive(Debug, Clone)]
pub struct BoundedDeque<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> BoundedDeque<T> {
    pub fn new(capacity: usize) -> Self {
        BoundedDeque {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Creates a deque holding `first` as its only element.
    pub fn with_sentinel(capacity: usize, first: T) -> Result<Self, DequeError> {
        let mut deque = BoundedDeque::new(capacity);
        deque.push_back(first)?;
        Ok(deque)
    }

    pub fn push_back(&mut self, item: T) -> Result<(), DequeError> {
        if self.items.len() >= self.capacity {
            return Err(DequeError::Overflow {
                capacity: self.capacity,
            });
        }

        self.items.push_back(item);
        Ok(())
    }

    pub fn pop_back(&mut self) -> Result<T, DequeError> {
        self.items.pop_back().ok_or(DequeError::Underflow)
    }

    pub fn pop_front(&mut self) -> Result<T, DequeError> {
        self.items.pop_front().ok_or(DequeError::Underflow)
    }

    pub fn peek_front(&self) -> Result<&T, DequeError> {
        self.items.front().ok_or(DequeError::Underflow)
    }

    /// Current top when the deque is used as a stack.
    pub fn peek_back(&self) -> Result<&T, DequeError> {
        self.items.back().ok_or(DequeError::Underflow)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterates from front to back.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<T: Display> Display for BoundedDeque<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "]")
    }
}
