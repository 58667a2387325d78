// src/stack/text.rs
//! Text rendering and parsing for [`Stack`].
//!
//! Rendering produces `[e0, e1, ..., en-1]`. Reading tokenises on
//! whitespace and appends integers until the first token that is not an
//! `i32` or the end of input. A token such as `12abc` counts as
//! non-integer as a whole.

use super::core::Stack;
use crate::error::{Result, StackError};
use std::fmt;
use std::io::BufRead;
use std::str::FromStr;
use tracing::debug;

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.as_slice().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", value)?;
        }
        f.write_str("]")
    }
}

impl Stack {
    /// Appends every leading integer token of `text`.
    ///
    /// Existing elements are kept. Returns how many values were appended.
    ///
    /// # Examples
    ///
    /// ```
    /// use intstack::Stack;
    ///
    /// let mut stack = Stack::from_slice(&[0]);
    /// assert_eq!(stack.extend_from_text("1 3\n5 x 7"), 3);
    /// assert_eq!(stack.to_string(), "[0, 1, 3, 5]");
    /// ```
    pub fn extend_from_text(&mut self, text: &str) -> usize {
        let (appended, _) = self.push_tokens(text);
        appended
    }

    /// Reads whitespace-separated integers from `reader` until a
    /// non-integer token or end of input.
    ///
    /// Input is consumed line by line; the rest of the line holding the
    /// stopping token is discarded. Returns how many values were appended.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::Io`] if the reader fails or yields invalid
    /// UTF-8. Values appended before the failure stay in the stack.
    ///
    /// # Examples
    ///
    /// ```
    /// use intstack::Stack;
    /// # use intstack::StackError;
    ///
    /// let mut input = "1 3 5 7 9".as_bytes();
    /// let mut stack = Stack::with_len(5);
    /// assert_eq!(stack.read_from(&mut input)?, 5);
    /// assert_eq!(stack.as_slice(), &[1, 3, 5, 7, 9]);
    /// # Ok::<(), StackError>(())
    /// ```
    pub fn read_from<R: BufRead>(&mut self, reader: &mut R) -> Result<usize> {
        let mut total = 0;
        let mut line = String::new();
        loop {
            line.clear();
            if reader.read_line(&mut line)? == 0 {
                return Ok(total);
            }
            let (appended, stopped) = self.push_tokens(&line);
            total += appended;
            if stopped {
                return Ok(total);
            }
        }
    }

    /// Pushes leading integer tokens. The flag reports an early stop.
    fn push_tokens(&mut self, text: &str) -> (usize, bool) {
        let mut appended = 0;
        for token in text.split_whitespace() {
            match token.parse::<i32>() {
                Ok(value) => {
                    self.buf.push(value);
                    appended += 1;
                }
                Err(_) => {
                    debug!(token, appended, "stopped reading at non-integer token");
                    return (appended, true);
                }
            }
        }
        (appended, false)
    }
}

/// Strict parsing: every whitespace token must be an `i32`.
///
/// # Examples
///
/// ```
/// use intstack::{Stack, StackError};
///
/// let stack: Stack = "7 7 1 7".parse()?;
/// assert_eq!(stack.count(7), 3);
///
/// assert!(matches!("1 two".parse::<Stack>(), Err(StackError::InvalidData(_))));
/// # Ok::<(), StackError>(())
/// ```
impl FromStr for Stack {
    type Err = StackError;

    fn from_str(s: &str) -> Result<Self> {
        let mut stack = Stack::new();
        for token in s.split_whitespace() {
            let value = token
                .parse::<i32>()
                .map_err(|e| StackError::InvalidData(format!("token {:?}: {}", token, e)))?;
            stack.push(value);
        }
        Ok(stack)
    }
}
