// src/buffer/core.rs
//! Core buffer structure and lifecycle operations
//!
//! This module provides the fundamental [`Buffer`] type: a contiguous run of
//! `i32` values with an explicit logical capacity that doubles on overflow.
//! Every allocation the buffer gives up is wiped first.

use tracing::{debug, trace};
use zeroize::Zeroize;

/// Capacity of a freshly constructed buffer.
pub const DEFAULT_CAPACITY: usize = 1;
/// Maximum number of slots a buffer may hold.
pub const MAX_CAPACITY: usize = 1 << 30;

/// A growable integer buffer with doubling capacity.
///
/// `capacity` is the logical slot count reported to callers. It starts at
/// [`DEFAULT_CAPACITY`], doubles whenever a push finds the buffer full, and
/// drops to zero when the buffer is [cleared](Self::clear) or
/// [taken](Self::take). Storage is securely zeroed on drop using the
/// [`zeroize`] crate.
///
/// # Examples
///
/// ```
/// use intstack::Buffer;
///
/// let mut buf = Buffer::new();
/// buf.push(10);
/// buf.push(20);
/// buf.push(30);
/// assert_eq!(buf.len(), 3);
/// assert_eq!(buf.capacity(), 4);
/// ```
#[derive(Debug, Zeroize)]
#[zeroize(drop)]
pub struct Buffer {
    /// Live elements; `storage.len()` is the buffer length
    pub(crate) storage: Vec<i32>,
    /// Logical slot count, never below `storage.len()`
    pub(crate) capacity: usize,
}

impl Buffer {
    /// Creates an empty buffer with one slot.
    ///
    /// # Examples
    ///
    /// ```
    /// use intstack::Buffer;
    ///
    /// let buf = Buffer::new();
    /// assert_eq!(buf.capacity(), 1);
    /// assert!(buf.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty buffer with `capacity` slots reserved.
    ///
    /// A capacity of zero yields a buffer in the released state.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` exceeds [`MAX_CAPACITY`].
    ///
    /// # Examples
    ///
    /// ```
    /// use intstack::Buffer;
    ///
    /// let buf = Buffer::with_capacity(5);
    /// assert_eq!(buf.capacity(), 5);
    /// assert_eq!(buf.len(), 0);
    /// ```
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(
            capacity <= MAX_CAPACITY,
            "Buffer capacity {} exceeds maximum {}",
            capacity,
            MAX_CAPACITY
        );
        Self {
            storage: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Returns the logical slot count.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of live elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use intstack::Buffer;
    ///
    /// let mut buf = Buffer::new();
    /// assert_eq!(buf.len(), 0);
    /// buf.push(7);
    /// assert_eq!(buf.len(), 1);
    /// ```
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns `true` if the buffer holds no elements.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Appends `value`, doubling capacity first if the buffer is full.
    ///
    /// A released buffer (capacity 0) grows to [`DEFAULT_CAPACITY`].
    ///
    /// # Panics
    ///
    /// Panics if growth would exceed [`MAX_CAPACITY`].
    ///
    /// # Examples
    ///
    /// ```
    /// use intstack::Buffer;
    ///
    /// let mut buf = Buffer::new();
    /// for v in 0..5 {
    ///     buf.push(v);
    /// }
    /// assert_eq!(buf.as_slice(), &[0, 1, 2, 3, 4]);
    /// assert_eq!(buf.capacity(), 8);
    /// ```
    #[inline]
    pub fn push(&mut self, value: i32) {
        if self.storage.len() == self.capacity {
            let new_capacity = if self.capacity == 0 {
                DEFAULT_CAPACITY
            } else {
                self.capacity.saturating_mul(2)
            };
            self.reallocate(new_capacity);
        }
        self.storage.push(value);
    }

    /// Removes and returns the last element.
    ///
    /// The vacated slot is zeroed. Capacity is unchanged.
    #[inline]
    pub fn pop(&mut self) -> Option<i32> {
        let value = self.storage.pop()?;
        // Vec::pop leaves the old value in spare capacity.
        self.storage.spare_capacity_mut()[0].write(0);
        Some(value)
    }

    /// Securely zeros and frees storage, leaving the buffer released.
    ///
    /// Length and capacity both become 0. The next [`push`](Self::push)
    /// allocates a single slot again.
    ///
    /// # Examples
    ///
    /// ```
    /// use intstack::Buffer;
    ///
    /// let mut buf = Buffer::new();
    /// buf.push(1);
    /// buf.clear();
    /// assert_eq!(buf.len(), 0);
    /// assert_eq!(buf.capacity(), 0);
    /// ```
    pub fn clear(&mut self) {
        debug!(len = self.len(), capacity = self.capacity, "releasing buffer");
        // Vec::zeroize wipes spare capacity as well as live elements.
        self.storage.zeroize();
        self.storage = Vec::new();
        self.capacity = 0;
    }

    /// Resizes to `new_len` elements.
    ///
    /// Existing elements up to `new_len` are preserved and every new slot is
    /// zero. When `new_len` exceeds the current capacity, capacity becomes
    /// `2 * new_len` (bounded by [`MAX_CAPACITY`]). Shrinking wipes the
    /// removed tail and keeps capacity.
    ///
    /// # Panics
    ///
    /// Panics if `new_len` exceeds [`MAX_CAPACITY`].
    ///
    /// # Examples
    ///
    /// ```
    /// use intstack::Buffer;
    ///
    /// let mut buf = Buffer::new();
    /// buf.push(1);
    /// buf.push(2);
    /// buf.push(3);
    ///
    /// buf.resize(5);
    /// assert_eq!(buf.as_slice(), &[1, 2, 3, 0, 0]);
    /// assert_eq!(buf.capacity(), 10);
    ///
    /// buf.resize(2);
    /// assert_eq!(buf.as_slice(), &[1, 2]);
    /// ```
    pub fn resize(&mut self, new_len: usize) {
        let len = self.storage.len();
        if new_len == len {
            return;
        }
        assert!(
            new_len <= MAX_CAPACITY,
            "Buffer length {} exceeds maximum {}",
            new_len,
            MAX_CAPACITY
        );

        if new_len > self.capacity {
            self.reallocate((new_len * 2).min(MAX_CAPACITY));
        }

        if new_len < len {
            self.storage[new_len..].zeroize();
            self.storage.truncate(new_len);
        } else {
            self.storage.resize(new_len, 0);
        }
        debug!(from = len, to = new_len, capacity = self.capacity, "resized buffer");
    }

    /// Replaces the contents with `count` copies of `value`.
    ///
    /// Equivalent to [`clear`](Self::clear) followed by `count` pushes, so
    /// capacity ends at the smallest power of two that fits `count`.
    ///
    /// # Examples
    ///
    /// ```
    /// use intstack::Buffer;
    ///
    /// let mut buf = Buffer::new();
    /// buf.push(9);
    /// buf.assign(3, 4);
    /// assert_eq!(buf.as_slice(), &[4, 4, 4]);
    /// ```
    pub fn assign(&mut self, count: usize, value: i32) {
        self.clear();
        for _ in 0..count {
            self.push(value);
        }
    }

    /// Moves the contents out, leaving this buffer released.
    ///
    /// # Examples
    ///
    /// ```
    /// use intstack::Buffer;
    ///
    /// let mut src = Buffer::new();
    /// src.push(5);
    ///
    /// let dst = src.take();
    /// assert_eq!(dst.as_slice(), &[5]);
    /// assert!(src.is_empty());
    /// assert_eq!(src.capacity(), 0);
    /// ```
    #[inline]
    pub fn take(&mut self) -> Self {
        std::mem::replace(self, Self::with_capacity(0))
    }

    /// Returns a slice of all live elements.
    #[inline]
    pub fn as_slice(&self) -> &[i32] {
        &self.storage
    }

    /// Returns a mutable slice of all live elements.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [i32] {
        &mut self.storage
    }

    /// Moves live elements into a fresh allocation of `new_capacity` slots
    /// and wipes the old one.
    fn reallocate(&mut self, new_capacity: usize) {
        assert!(
            new_capacity <= MAX_CAPACITY,
            "Buffer capacity {} exceeds maximum {}",
            new_capacity,
            MAX_CAPACITY
        );
        trace!(old_capacity = self.capacity, new_capacity, "growing buffer");

        let mut storage = Vec::with_capacity(new_capacity);
        storage.extend_from_slice(&self.storage);
        let mut old = std::mem::replace(&mut self.storage, storage);
        old.zeroize();
        self.capacity = new_capacity;
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Buffer {
    fn clone(&self) -> Self {
        let mut storage = Vec::with_capacity(self.capacity);
        storage.extend_from_slice(&self.storage);
        Self {
            storage,
            capacity: self.capacity,
        }
    }
}

impl AsRef<[i32]> for Buffer {
    fn as_ref(&self) -> &[i32] {
        self.as_slice()
    }
}
