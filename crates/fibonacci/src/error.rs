use thiserror::Error;

/// Errors returned by the sequence generator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FibonacciError {
    /// A count or index was negative.
    #[error("{name} cannot be negative (got {value})")]
    InvalidArgument { name: &'static str, value: i64 },

    /// The term at `index` does not fit in an `i64`.
    #[error("arithmetic overflow computing term {index}: value exceeds i64::MAX")]
    ArithmeticOverflow { index: usize },
}

/// Error category, for callers that only need to branch on the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    ArithmeticOverflow,
}

impl FibonacciError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FibonacciError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            FibonacciError::ArithmeticOverflow { .. } => ErrorKind::ArithmeticOverflow,
        }
    }
}

pub type Result<T> = std::result::Result<T, FibonacciError>;
