// src/error.rs
//! Error types for stack operations with conversion support

use std::fmt;

/// Errors that can occur during stack operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StackError {
    /// Clamped access on a container with no elements
    EmptyContainer,
    /// Checked access past the last element
    IndexOutOfBounds {
        /// Requested index
        index: usize,
        /// Number of live elements at the time of the request
        len: usize,
    },
    /// Text could not be parsed as integers
    InvalidData(String),
    /// I/O error from a text source
    Io(String),
}

impl fmt::Display for StackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyContainer => write!(f, "Container is empty"),
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "Index {} out of bounds for length {}", index, len)
            }
            Self::InvalidData(msg) => write!(f, "Invalid data: {}", msg),
            Self::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for StackError {}

// ============================================================================
// ERROR CONVERSION
// ============================================================================

/// Convert StackError to std::io::Error
impl From<StackError> for std::io::Error {
    fn from(err: StackError) -> Self {
        use std::io::ErrorKind;
        match err {
            StackError::InvalidData(_) => std::io::Error::new(ErrorKind::InvalidData, err),
            StackError::IndexOutOfBounds { .. } | StackError::EmptyContainer => {
                std::io::Error::new(ErrorKind::InvalidInput, err)
            }
            StackError::Io(msg) => std::io::Error::other(msg),
        }
    }
}

/// Convert std::io::Error to StackError
impl From<std::io::Error> for StackError {
    fn from(err: std::io::Error) -> Self {
        StackError::Io(err.to_string())
    }
}

impl From<std::num::ParseIntError> for StackError {
    fn from(err: std::num::ParseIntError) -> Self {
        StackError::InvalidData(err.to_string())
    }
}

/// Convert StackError to anyhow::Error
#[cfg(feature = "anyhow")]
impl From<StackError> for anyhow::Error {
    fn from(err: StackError) -> Self {
        anyhow::anyhow!("{}", err)
    }
}

#[cfg(feature = "anyhow")]
impl From<anyhow::Error> for StackError {
    fn from(err: anyhow::Error) -> Self {
        StackError::InvalidData(err.to_string())
    }
}

// ============================================================================
// RESULT TYPE ALIASES
// ============================================================================

/// Result type alias for stack operations
pub type Result<T> = std::result::Result<T, StackError>;

/// Extension trait for converting Results between different error types
pub trait ResultExt<T> {
    /// Convert to anyhow::Result
    #[cfg(feature = "anyhow")]
    fn into_anyhow(self) -> anyhow::Result<T>;

    /// Convert to io::Result
    fn into_io(self) -> std::io::Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    #[cfg(feature = "anyhow")]
    fn into_anyhow(self) -> anyhow::Result<T> {
        self.map_err(|e| e.into())
    }

    fn into_io(self) -> std::io::Result<T> {
        self.map_err(|e| e.into())
    }
}
