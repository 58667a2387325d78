// src/buffer/access.rs
//! Element lookup policies: sentinel, clamped, and checked.

use super::core::Buffer;
use crate::error::{Result, StackError};

/// Value returned by [`Buffer::get`] for an index past the end.
pub const SENTINEL: i32 = -1;

impl Buffer {
    /// Returns the element at `index`, or [`SENTINEL`] if `index >= len()`.
    ///
    /// The sentinel is indistinguishable from a stored `-1`; use
    /// [`at`](Self::at) or [`get_mut`](Self::get_mut) when that matters.
    #[inline]
    pub fn get(&self, index: usize) -> i32 {
        self.storage.get(index).copied().unwrap_or(SENTINEL)
    }

    /// Clamped lookup.
    ///
    /// Negative indices count from the end (`-1` is the last element).
    /// An index still negative after wrapping reads the first element; an
    /// index at or past the end reads the last element.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::EmptyContainer`] if the buffer has no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use intstack::Buffer;
    /// # use intstack::StackError;
    ///
    /// let mut buf = Buffer::new();
    /// for v in [10, 20, 30] {
    ///     buf.push(v);
    /// }
    /// assert_eq!(buf.at(1)?, 20);
    /// assert_eq!(buf.at(-1)?, 30);
    /// assert_eq!(buf.at(-10)?, 10);
    /// assert_eq!(buf.at(99)?, 30);
    /// # Ok::<(), StackError>(())
    /// ```
    pub fn at(&self, index: isize) -> Result<i32> {
        let len = self.storage.len();
        if len == 0 {
            return Err(StackError::EmptyContainer);
        }

        let index = if index < 0 {
            index.saturating_add(len as isize)
        } else {
            index
        };
        let slot = if index < 0 {
            0
        } else {
            (index as usize).min(len - 1)
        };
        Ok(self.storage[slot])
    }

    /// Checked mutable access.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::IndexOutOfBounds`] if `index >= len()`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Result<&mut i32> {
        let len = self.storage.len();
        self.storage
            .get_mut(index)
            .ok_or(StackError::IndexOutOfBounds { index, len })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(values: &[i32]) -> Buffer {
        let mut buf = Buffer::new();
        for &v in values {
            buf.push(v);
        }
        buf
    }

    #[test]
    fn test_get_sentinel() {
        let buf = filled(&[3, 4]);
        assert_eq!(buf.get(0), 3);
        assert_eq!(buf.get(1), 4);
        assert_eq!(buf.get(2), SENTINEL);
        assert_eq!(Buffer::new().get(0), SENTINEL);
    }

    #[test]
    fn test_get_ignores_spare_capacity() {
        let mut buf = Buffer::with_capacity(8);
        buf.push(1);
        assert_eq!(buf.get(3), SENTINEL);
    }

    #[test]
    fn test_at_in_range() {
        let buf = filled(&[1, 2, 3]);
        for (i, expected) in [1, 2, 3].into_iter().enumerate() {
            assert_eq!(buf.at(i as isize).unwrap(), expected);
        }
    }

    #[test]
    fn test_at_negative_wraps() {
        let buf = filled(&[1, 2, 3]);
        assert_eq!(buf.at(-1).unwrap(), 3);
        assert_eq!(buf.at(-3).unwrap(), 1);
    }

    #[test]
    fn test_at_clamps() {
        let buf = filled(&[1, 2, 3]);
        assert_eq!(buf.at(-4).unwrap(), 1);
        assert_eq!(buf.at(isize::MIN).unwrap(), 1);
        assert_eq!(buf.at(3).unwrap(), 3);
        assert_eq!(buf.at(isize::MAX).unwrap(), 3);
    }

    #[test]
    fn test_at_empty() {
        assert_eq!(Buffer::new().at(0), Err(StackError::EmptyContainer));

        let mut released = filled(&[1]);
        released.clear();
        assert_eq!(released.at(-1), Err(StackError::EmptyContainer));
    }

    #[test]
    fn test_get_mut() {
        let mut buf = filled(&[1, 2]);
        *buf.get_mut(1).unwrap() = 7;
        assert_eq!(buf.as_slice(), &[1, 7]);
        assert_eq!(
            buf.get_mut(2),
            Err(StackError::IndexOutOfBounds { index: 2, len: 2 })
        );
    }
}
