use crate::error::{FibonacciError, Result};

/// Number of leading Fibonacci terms, F(0) through F(92), that fit in an `i64`.
pub const MAX_TERMS: usize = 93;

/// Generates the first `count` Fibonacci numbers.
///
/// The sequence starts `0, 1, 1, 2, 3, 5, 8, ...` and each term after the
/// second is the sum of the two before it. The result is built in a single
/// pass with checked addition.
///
/// # Arguments
///
/// * `count` - How many terms to produce (must be non-negative)
///
/// # Returns
///
/// A vector of exactly `count` terms in index order.
///
/// # Errors
///
/// * [`FibonacciError::InvalidArgument`] if `count` is negative
/// * [`FibonacciError::ArithmeticOverflow`] if a term would exceed `i64::MAX`;
///   this happens for any `count` greater than [`MAX_TERMS`]
///
/// # Examples
///
/// ```
/// use fibonacci_rs::generate;
///
/// assert_eq!(generate(0).unwrap(), Vec::<i64>::new());
/// assert_eq!(generate(1).unwrap(), vec![0]);
/// assert_eq!(generate(2).unwrap(), vec![0, 1]);
/// assert_eq!(generate(7).unwrap(), vec![0, 1, 1, 2, 3, 5, 8]);
/// assert!(generate(-1).is_err());
/// ```
pub fn generate(count: i64) -> Result<Vec<i64>> {
    if count < 0 {
        return Err(FibonacciError::InvalidArgument {
            name: "count",
            value: count,
        });
    }

    // Anything past MAX_TERMS overflows before it is pushed.
    let capacity = usize::try_from(count).map_or(MAX_TERMS, |c| c.min(MAX_TERMS));
    let mut sequence: Vec<i64> = Vec::with_capacity(capacity);

    for index in 0..count as u64 {
        let index = index as usize;
        let next = match index {
            0 => 0,
            1 => 1,
            _ => sequence[index - 1]
                .checked_add(sequence[index - 2])
                .ok_or(FibonacciError::ArithmeticOverflow { index })?,
        };
        sequence.push(next);
    }

    Ok(sequence)
}

/// Computes the Fibonacci number at `index` (0-based).
///
/// Same contract as [`generate`]: negative input is rejected and overflow is
/// reported rather than wrapped. `generate(n)?[i] == term(i)?` for every
/// `i < n`.
///
/// ```
/// use fibonacci_rs::term;
///
/// assert_eq!(term(0).unwrap(), 0);
/// assert_eq!(term(10).unwrap(), 55);
/// assert_eq!(term(92).unwrap(), 7540113804746346429);
/// assert!(term(93).is_err());
/// ```
pub fn term(index: i64) -> Result<i64> {
    if index < 0 {
        return Err(FibonacciError::InvalidArgument {
            name: "index",
            value: index,
        });
    }
    if index < 2 {
        return Ok(index);
    }

    let mut prev: i64 = 0;
    let mut curr: i64 = 1;

    for i in 2..=index as u64 {
        let next = curr
            .checked_add(prev)
            .ok_or(FibonacciError::ArithmeticOverflow { index: i as usize })?;
        prev = curr;
        curr = next;
    }

    Ok(curr)
}

/// Joins terms with `", "`. An empty slice yields an empty string.
pub fn format_sequence(sequence: &[i64]) -> String {
    sequence
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
