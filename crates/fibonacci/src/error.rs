use thiserror::Error;

/// Errors that can occur when narrowing sequence values to fixed-width integers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// The value at `position` (1-based) does not fit in the target type.
    #[error("Fibonacci value at position {position} does not fit in u64")]
    Overflow { position: usize },
}
