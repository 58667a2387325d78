// src/lib.rs
//! # Integer Stack Library
//!
//! A value-semantic integer stack backed by a doubling buffer.
//!
//! Features:
//! - Amortized O(1) push with explicit capacity doubling
//! - Deep copy via `Clone`, O(1) `swap`, and `take` for move-out
//! - Three lookup policies: panicking index, clamped `at`, sentinel `get`
//! - Lexicographic equality and ordering
//! - `[a, b, c]` rendering and whitespace-separated integer input
//! - Released storage is securely zeroed using the `zeroize` crate

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::missing_safety_doc)]

pub mod buffer;
pub mod config;
pub mod error;
pub mod stack;

// Re-export main types
pub use buffer::{Buffer, MAX_CAPACITY, SENTINEL};
pub use config::StackConfig;
pub use error::{Result, ResultExt, StackError};
pub use stack::Stack;

/// Commonly used imports.
pub mod prelude {
    pub use crate::buffer::Buffer;
    pub use crate::config::StackConfig;
    pub use crate::error::{Result, ResultExt, StackError};
    pub use crate::stack::Stack;
}
