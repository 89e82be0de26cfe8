//! Error types for the wheel core

use thiserror::Error;

/// Core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WheelError {
    #[error("Pool is empty")]
    EmptyPool,

    #[error("Value {0} is not in the pool")]
    ValueNotFound(i64),

    #[error("Duplicate value in pool: {0}")]
    DuplicateValue(i64),

    #[error("Invalid range: {start}..={end}")]
    InvalidRange { start: i64, end: i64 },

    #[error("Range {start}..={end} exceeds {max} entries")]
    RangeTooLarge { start: i64, end: i64, max: usize },
}

/// Result type alias
pub type WheelResult<T> = Result<T, WheelError>;
