//! Fixed-capacity stack implementation
//!
//! [`BoundedStack`] is the storage primitive behind each peg. Capacity is set
//! once at construction and never grows; pushing onto a full stack and
//! popping or peeking an empty one are reported as [`StackError`]s rather
//! than panics, so the solver can surface them as internal-consistency faults.

use std::fmt;
use thiserror::Error;

/// Errors raised by [`BoundedStack`] operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StackError {
    /// Pop or peek on a stack with no elements
    #[error("Stack {label} is empty")]
    EmptyStack { label: String },

    /// Push on a stack already holding `capacity` elements
    #[error("Stack {label} is full (capacity {capacity})")]
    CapacityExceeded { label: String, capacity: usize },
}

/// A labelled last-in-first-out container with a fixed capacity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedStack<T> {
    items: Vec<T>,
    capacity: usize,
    label: String,
}

impl<T> BoundedStack<T> {
    pub fn new(capacity: usize, label: impl Into<String>) -> Self {
        BoundedStack {
            items: Vec::with_capacity(capacity),
            capacity,
            label: label.into(),
        }
    }

    /// Push an item onto the top of the stack
    pub fn push(&mut self, item: T) -> Result<(), StackError> {
        if self.is_full() {
            return Err(StackError::CapacityExceeded {
                label: self.label.clone(),
                capacity: self.capacity,
            });
        }
        self.items.push(item);
        Ok(())
    }

    /// Remove and return the top item
    pub fn pop(&mut self) -> Result<T, StackError> {
        self.items.pop().ok_or_else(|| StackError::EmptyStack {
            label: self.label.clone(),
        })
    }

    /// Get the top item without removing it
    pub fn peek(&self) -> Result<&T, StackError> {
        self.items.last().ok_or_else(|| StackError::EmptyStack {
            label: self.label.clone(),
        })
    }

    /// Current contents, bottom to top
    pub fn snapshot(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl<T: fmt::Debug> fmt::Display for BoundedStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Stack {}: {:?}", self.label, self.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_reverses_order() {
        let mut stack = BoundedStack::new(4, "A");
        for item in [10, 20, 30, 40] {
            stack.push(item).unwrap();
        }

        let popped: Vec<i32> = (0..4).map(|_| stack.pop().unwrap()).collect();
        assert_eq!(popped, vec![40, 30, 20, 10]);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_push_on_full_stack() {
        let mut stack = BoundedStack::new(2, "B");
        stack.push(1).unwrap();
        stack.push(2).unwrap();
        assert!(stack.is_full());

        let err = stack.push(3).unwrap_err();
        assert_eq!(
            err,
            StackError::CapacityExceeded {
                label: "B".to_string(),
                capacity: 2
            }
        );
        // Failed push leaves contents untouched
        assert_eq!(stack.snapshot(), &[1, 2]);
    }

    #[test]
    fn test_pop_and_peek_on_empty_stack() {
        let mut stack: BoundedStack<u32> = BoundedStack::new(3, "C");

        assert!(matches!(stack.pop(), Err(StackError::EmptyStack { .. })));
        assert!(matches!(stack.peek(), Err(StackError::EmptyStack { .. })));
        assert_eq!(stack.pop().unwrap_err().to_string(), "Stack C is empty");
    }

    #[test]
    fn test_peek_does_not_mutate() {
        let mut stack = BoundedStack::new(3, "A");
        stack.push('x').unwrap();
        stack.push('y').unwrap();

        assert_eq!(stack.peek(), Ok(&'y'));
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.snapshot(), &['x', 'y']);
    }

    #[test]
    fn test_zero_capacity_is_always_full() {
        let mut stack = BoundedStack::new(0, "Z");
        assert!(stack.is_full());
        assert!(stack.is_empty());
        assert!(stack.push(1).is_err());
    }

    #[test]
    fn test_display() {
        let mut stack = BoundedStack::new(3, "A");
        stack.push(3).unwrap();
        stack.push(2).unwrap();
        assert_eq!(stack.to_string(), "Stack A: [3, 2]");
    }
}
