//! Error type shared by every module of the crate.

use thiserror::Error;

/// Errors raised by heap operations, problem construction, solution
/// validation, configuration checks and instance I/O.
#[derive(Error, Debug)]
pub enum PartitionError {
    #[error("heap is full (capacity {capacity})")]
    HeapFull { capacity: usize },

    #[error("heap is empty")]
    EmptyHeap,

    #[error("problem instance must contain at least one value")]
    EmptyProblem,

    #[error("sum of problem values overflows u64")]
    SumOverflow,

    #[error("invalid solution: {0}")]
    InvalidSolution(String),

    #[error("solution has length {actual}, problem has {expected} values")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("unknown algorithm code {0}")]
    UnknownAlgorithm(u32),

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PartitionError>;
