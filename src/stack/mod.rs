// src/stack/mod.rs
//! Value-semantic stack over a [`Buffer`](crate::buffer::Buffer).

mod cmp;
mod core;
mod text;

pub use self::core::Stack;
