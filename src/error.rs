use tokio::sync::AcquireError;
use tokio::task::JoinError;

#[derive(Debug, thiserror::Error)]
pub enum SequenceError {
    /// F(`index`) does not fit in the fixed-width integer type.
    #[error("term {index} overflows the integer type")]
    Overflow { index: u64 },
    #[error("chunk size must be at least 1")]
    InvalidChunkSize,
    #[error("Tokio Join error: {0:?}")]
    TokioJoin(#[from] JoinError),
    #[error("Std Join error: {0:?}")]
    StdJoin(String),
    #[error("Acquire error: {0:?}")]
    Acquire(#[from] AcquireError),
}
