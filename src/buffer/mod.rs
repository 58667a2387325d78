// src/buffer/mod.rs
//! Growable integer storage.

mod access;
mod core;
mod unsafe_ops;

pub use self::access::SENTINEL;
pub use self::core::{Buffer, DEFAULT_CAPACITY, MAX_CAPACITY};
