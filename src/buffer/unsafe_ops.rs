// src/buffer/unsafe_ops.rs
//! Unchecked (unsafe) element access

use super::core::Buffer;

impl Buffer {
    /// Reads the element at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// Caller MUST guarantee: `index < self.len()`.
    #[inline(always)]
    pub unsafe fn get_unchecked(&self, index: usize) -> i32 {
        debug_assert!(
            index < self.storage.len(),
            "get_unchecked: index {} >= len {}",
            index,
            self.storage.len()
        );

        unsafe { *self.storage.get_unchecked(index) }
    }

    /// Returns a mutable reference to the element at `index` without bounds
    /// checking.
    ///
    /// # Safety
    ///
    /// Caller MUST guarantee: `index < self.len()`.
    #[inline(always)]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut i32 {
        debug_assert!(
            index < self.storage.len(),
            "get_unchecked_mut: index {} >= len {}",
            index,
            self.storage.len()
        );

        unsafe { self.storage.get_unchecked_mut(index) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unchecked_read_write() {
        let mut buf = Buffer::new();
        buf.push(1);
        buf.push(2);

        unsafe {
            *buf.get_unchecked_mut(0) = 40;
            assert_eq!(buf.get_unchecked(0), 40);
            assert_eq!(buf.get_unchecked(1), 2);
        }
    }
}
