//! Fibonacci sequence generation with checked arithmetic.
//!
//! Terms are `i64`. Every addition is checked, so a request that would run
//! past `i64::MAX` fails with [`FibonacciError::ArithmeticOverflow`] instead
//! of wrapping. Negative counts fail with [`FibonacciError::InvalidArgument`].
//!
//! # Example
//!
//! ```
//! use fibonacci_rs::{format_sequence, generate};
//!
//! let seq = generate(7)?;
//! assert_eq!(seq, vec![0, 1, 1, 2, 3, 5, 8]);
//! assert_eq!(format_sequence(&seq), "0, 1, 1, 2, 3, 5, 8");
//! # Ok::<(), fibonacci_rs::FibonacciError>(())
//! ```

pub mod error;
pub mod sequence;

pub use error::{ErrorKind, FibonacciError, Result};
pub use sequence::{format_sequence, generate, term, MAX_TERMS};
