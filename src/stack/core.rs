// src/stack/core.rs
//! The [`Stack`] container and its forwarding operations.

use crate::buffer::Buffer;
use crate::config::StackConfig;
use crate::error::Result;
use std::ops::{Index, IndexMut};

/// A value-semantic integer stack.
///
/// Owns exactly one [`Buffer`]. Cloning deep-copies it, [`take`](Self::take)
/// moves it out, and dropping wipes it.
///
/// Three lookup policies are available:
///
/// | Operation | Out of range |
/// |-----------|--------------|
/// | `stack[i]` | panics |
/// | [`at`](Self::at) | clamps to the nearest end, errors only when empty |
/// | [`get`](Self::get) | returns [`SENTINEL`](crate::buffer::SENTINEL) |
///
/// # Examples
///
/// ```
/// use intstack::Stack;
///
/// let mut a = Stack::from_slice(&[1, 3, 5]);
/// let b = a.clone();
/// a[0] = 9;
///
/// assert_eq!(a.to_string(), "[9, 3, 5]");
/// assert_eq!(b.to_string(), "[1, 3, 5]");
/// assert!(b < a);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Stack {
    pub(crate) buf: Buffer,
}

impl Stack {
    /// Creates an empty stack with a single reserved slot.
    #[inline]
    pub fn new() -> Self {
        Self { buf: Buffer::new() }
    }

    /// Creates an empty stack with `n` slots reserved.
    ///
    /// The length stays 0; values are added by push or text input.
    ///
    /// # Examples
    ///
    /// ```
    /// use intstack::Stack;
    ///
    /// let mut stack = Stack::with_len(5);
    /// assert_eq!(stack.length(), 0);
    /// assert_eq!(stack.capacity(), 5);
    ///
    /// stack.extend_from_text("1 3 5 7 9");
    /// assert_eq!(stack.length(), 5);
    /// ```
    #[inline]
    pub fn with_len(n: usize) -> Self {
        Self {
            buf: Buffer::with_capacity(n),
        }
    }

    /// Creates an empty stack from a [`StackConfig`].
    pub fn with_config(config: StackConfig) -> Self {
        Self {
            buf: Buffer::with_capacity(config.initial_capacity),
        }
    }

    /// Creates a stack holding a copy of `values`, in order.
    pub fn from_slice(values: &[i32]) -> Self {
        let mut stack = Self::new();
        stack.extend(values.iter().copied());
        stack
    }

    /// Clears all elements and reinitializes the buffer.
    ///
    /// Unlike [`Buffer::clear`], the stack is left ready for use with the
    /// default capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use intstack::Stack;
    ///
    /// let mut stack = Stack::from_slice(&[1, 2, 3]);
    /// stack.clear();
    /// assert!(stack.empty());
    /// assert_eq!(stack.capacity(), 1);
    /// ```
    pub fn clear(&mut self) {
        self.buf.clear();
        self.buf = Buffer::new();
    }

    /// Clamped lookup, see [`Buffer::at`].
    #[inline]
    pub fn at(&self, index: isize) -> Result<i32> {
        self.buf.at(index)
    }

    /// Sentinel lookup, see [`Buffer::get`].
    #[inline]
    pub fn get(&self, index: usize) -> i32 {
        self.buf.get(index)
    }

    /// Checked mutable lookup, see [`Buffer::get_mut`].
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Result<&mut i32> {
        self.buf.get_mut(index)
    }

    /// Resizes to `n` elements, zero-filling new slots. See [`Buffer::resize`].
    #[inline]
    pub fn resize(&mut self, n: usize) {
        self.buf.resize(n);
    }

    /// Replaces the contents with `n` copies of `value`.
    #[inline]
    pub fn assign(&mut self, n: usize, value: i32) {
        self.buf.assign(n, value);
    }

    /// Number of elements.
    #[inline]
    pub fn length(&self) -> usize {
        self.buf.len()
    }

    /// Alias of [`length`](Self::length).
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if there are no elements.
    #[inline]
    pub fn empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Alias of [`empty`](Self::empty).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Logical capacity of the underlying buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Pushes `value` on top.
    #[inline]
    pub fn push(&mut self, value: i32) {
        self.buf.push(value);
    }

    /// Removes and returns the top element.
    #[inline]
    pub fn pop(&mut self) -> Option<i32> {
        self.buf.pop()
    }

    /// Returns the top element without removing it.
    #[inline]
    pub fn top(&self) -> Option<i32> {
        self.buf.as_slice().last().copied()
    }

    /// Exchanges contents with `other` without copying elements.
    #[inline]
    pub fn swap(&mut self, other: &mut Stack) {
        std::mem::swap(&mut self.buf, &mut other.buf);
    }

    /// Moves the contents out, leaving this stack released.
    ///
    /// A released stack is empty with zero capacity. It stays safe to use;
    /// the next push allocates again.
    ///
    /// # Examples
    ///
    /// ```
    /// use intstack::Stack;
    ///
    /// let mut a = Stack::from_slice(&[4, 5]);
    /// let b = a.take();
    /// assert_eq!(b.as_slice(), &[4, 5]);
    /// assert!(a.empty());
    /// assert_eq!(a.capacity(), 0);
    /// ```
    #[inline]
    pub fn take(&mut self) -> Stack {
        Stack {
            buf: self.buf.take(),
        }
    }

    /// Returns `true` if any element equals `value`.
    pub fn contains(&self, value: i32) -> bool {
        self.buf.as_slice().contains(&value)
    }

    /// Number of elements equal to `value`.
    pub fn count(&self, value: i32) -> usize {
        self.buf.as_slice().iter().filter(|&&v| v == value).count()
    }

    /// Returns a slice of all elements, bottom first.
    #[inline]
    pub fn as_slice(&self) -> &[i32] {
        self.buf.as_slice()
    }
}

impl Index<usize> for Stack {
    type Output = i32;

    /// # Panics
    ///
    /// Panics if `index >= self.length()`.
    #[inline]
    fn index(&self, index: usize) -> &i32 {
        let len = self.buf.len();
        match self.buf.as_slice().get(index) {
            Some(value) => value,
            None => panic!("stack index {} out of bounds for length {}", index, len),
        }
    }
}

impl IndexMut<usize> for Stack {
    /// # Panics
    ///
    /// Panics if `index >= self.length()`.
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut i32 {
        let len = self.buf.len();
        match self.buf.as_mut_slice().get_mut(index) {
            Some(value) => value,
            None => panic!("stack index {} out of bounds for length {}", index, len),
        }
    }
}

impl AsRef<[i32]> for Stack {
    fn as_ref(&self) -> &[i32] {
        self.as_slice()
    }
}

impl From<Vec<i32>> for Stack {
    fn from(values: Vec<i32>) -> Self {
        values.into_iter().collect()
    }
}

impl From<&[i32]> for Stack {
    fn from(values: &[i32]) -> Self {
        Self::from_slice(values)
    }
}

impl FromIterator<i32> for Stack {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}

impl Extend<i32> for Stack {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for value in iter {
            self.buf.push(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StackError;

    #[test]
    fn test_new_is_empty() {
        let stack = Stack::new();
        assert!(stack.empty());
        assert_eq!(stack.length(), 0);
        assert_eq!(stack.capacity(), 1);
    }

    #[test]
    fn test_with_len_reserves_only() {
        let stack = Stack::with_len(5);
        assert_eq!(stack.length(), 0);
        assert_eq!(stack.capacity(), 5);
    }

    #[test]
    fn test_from_slice_keeps_order() {
        let stack = Stack::from_slice(&[5, 4, 3]);
        assert_eq!(stack.as_slice(), &[5, 4, 3]);
        assert_eq!(stack.capacity(), 4);
    }

    #[test]
    fn test_clear_reinitializes() {
        let mut stack = Stack::from_slice(&[1, 2, 3]);
        stack.clear();
        assert!(stack.empty());
        assert_eq!(stack.capacity(), 1);

        stack.push(8);
        assert_eq!(stack.as_slice(), &[8]);
    }

    #[test]
    fn test_push_pop_top() {
        let mut stack = Stack::new();
        assert_eq!(stack.top(), None);
        stack.push(1);
        stack.push(2);
        assert_eq!(stack.top(), Some(2));
        assert_eq!(stack.pop(), Some(2));
        assert_eq!(stack.pop(), Some(1));
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn test_swap() {
        let mut a = Stack::from_slice(&[1]);
        let mut b = Stack::from_slice(&[2, 3]);
        a.swap(&mut b);
        assert_eq!(a.as_slice(), &[2, 3]);
        assert_eq!(b.as_slice(), &[1]);
    }

    #[test]
    fn test_take_releases_source() {
        let mut a = Stack::from_slice(&[1, 2]);
        let b = a.take();
        assert_eq!(b.as_slice(), &[1, 2]);
        assert!(a.empty());
        assert_eq!(a.capacity(), 0);

        a.push(3);
        assert_eq!(a.as_slice(), &[3]);
    }

    #[test]
    fn test_move_assignment() {
        let mut a = Stack::from_slice(&[1]);
        let mut b = Stack::from_slice(&[7, 8]);
        assert_eq!(a.length(), 1);
        a = b.take();
        assert_eq!(a.as_slice(), &[7, 8]);
        assert!(b.empty());
    }

    #[test]
    fn test_clone_from_deep_copies() {
        let src = Stack::from_slice(&[4, 5, 6]);
        let mut dst = Stack::from_slice(&[1]);
        dst.clone_from(&src);
        dst[0] = 0;
        assert_eq!(src.as_slice(), &[4, 5, 6]);
        assert_eq!(dst.as_slice(), &[0, 5, 6]);
    }

    #[test]
    fn test_contains_and_count() {
        let stack = Stack::from_slice(&[7, 7, 1, 7]);
        assert!(stack.contains(1));
        assert!(!stack.contains(2));
        assert_eq!(stack.count(7), 3);
        assert_eq!(stack.count(2), 0);
    }

    #[test]
    fn test_index_write() {
        let mut stack = Stack::from_slice(&[1, 2, 3]);
        stack[1] = 7;
        stack[2] = stack[1];
        assert_eq!(stack.as_slice(), &[1, 7, 7]);
    }

    #[test]
    #[should_panic(expected = "out of bounds for length 3")]
    fn test_index_out_of_range_panics() {
        let stack = Stack::from_slice(&[1, 2, 3]);
        let _ = stack[3];
    }

    #[test]
    fn test_forwarded_access() {
        let mut stack = Stack::from_slice(&[1, 2, 3]);
        assert_eq!(stack.at(-1), Ok(3));
        assert_eq!(stack.get(9), -1);
        assert_eq!(
            stack.get_mut(3),
            Err(StackError::IndexOutOfBounds { index: 3, len: 3 })
        );
        assert_eq!(Stack::new().at(0), Err(StackError::EmptyContainer));
    }

    #[test]
    fn test_resize_and_assign() {
        let mut stack = Stack::from_slice(&[1, 2, 3]);
        stack.resize(5);
        assert_eq!(stack.as_slice(), &[1, 2, 3, 0, 0]);

        stack.assign(4, 6);
        assert_eq!(stack.as_slice(), &[6, 6, 6, 6]);
    }

    #[test]
    fn test_conversions() {
        let from_vec = Stack::from(vec![1, 2]);
        let from_slice: Stack = [1, 2].as_slice().into();
        let collected: Stack = (1..=2).collect();
        assert_eq!(from_vec, from_slice);
        assert_eq!(from_slice, collected);
    }

    #[test]
    fn test_with_config() {
        let stack = Stack::with_config(StackConfig::default().initial_capacity(32));
        assert_eq!(stack.capacity(), 32);
        let released = Stack::with_config(StackConfig::default().initial_capacity(0));
        assert_eq!(released.capacity(), 0);
    }
}
