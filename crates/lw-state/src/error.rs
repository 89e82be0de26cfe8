//! Error types for persistence and sessions

use lw_wheel::WheelError;
use thiserror::Error;

/// Storage errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Session errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Invalid wheel config: {0}")]
    InvalidConfig(String),

    #[error("No entries left")]
    Exhausted,

    #[error("Spin already in progress (pending value {0})")]
    SpinInProgress(i64),

    #[error("No spin awaiting confirmation")]
    NoPendingSelection,

    #[error("Confirmed value {requested} does not match pending value {pending}")]
    SelectionMismatch { pending: i64, requested: i64 },

    #[error(transparent)]
    Wheel(#[from] WheelError),
}

pub type SessionResult<T> = Result<T, SessionError>;
