// src/config.rs
//! Construction options for [`Stack`](crate::Stack).

use crate::buffer::DEFAULT_CAPACITY;

/// Configuration for a new stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackConfig {
    /// Slots reserved before the first growth. Zero starts the stack in
    /// the released state; the first push then allocates one slot.
    pub initial_capacity: usize,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
        }
    }
}

impl StackConfig {
    /// Sets the initial capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use intstack::{Stack, StackConfig};
    ///
    /// let stack = Stack::with_config(StackConfig::default().initial_capacity(64));
    /// assert_eq!(stack.capacity(), 64);
    /// assert!(stack.empty());
    /// ```
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }
}
