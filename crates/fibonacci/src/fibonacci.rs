use std::iter::FusedIterator;
use std::mem;

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};

use crate::error::SequenceError;

/// Lazy, unbounded producer of the Fibonacci sequence.
///
/// Yields 1, 1, 2, 3, 5, 8, 13, ... and never returns `None`; bound
/// consumption with [`Iterator::take`] or similar. Only the two most recent
/// values are kept, so memory stays constant apart from the growth of the
/// numbers themselves.
///
/// # Examples
///
/// ```
/// use fibonacci_rs::fibonacci::Fibonacci;
/// use num_bigint::BigUint;
///
/// let elems: Vec<BigUint> = Fibonacci::new().take(10).collect();
/// let expected: Vec<BigUint> = [1u32, 1, 2, 3, 5, 8, 13, 21, 34, 55]
///     .into_iter()
///     .map(BigUint::from)
///     .collect();
/// assert_eq!(elems, expected);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fibonacci {
    a: BigUint,
    // always the next value to be produced
    b: BigUint,
}

impl Fibonacci {
    pub fn new() -> Fibonacci {
        Fibonacci {
            a: BigUint::zero(),
            b: BigUint::one(),
        }
    }
}

impl Default for Fibonacci {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Fibonacci {
    type Item = BigUint;

    fn next(&mut self) -> Option<BigUint> {
        let sum = &self.a + &self.b;
        self.a = mem::replace(&mut self.b, sum);
        Some(self.a.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl FusedIterator for Fibonacci {}

/// Computes the nth Fibonacci number.
///
/// Fibonacci sequence: 0, 1, 1, 2, 3, 5, 8, 13, 21, ...
/// Iterative, O(n) time and O(1) extra space.
///
/// # Arguments
///
/// * `n` - The index (0-based) of the Fibonacci number to compute
///
/// For `n >= 1` this is the nth value yielded by a fresh [`Fibonacci`].
pub fn fibonacci(n: u64) -> BigUint {
    let mut a = BigUint::zero();
    let mut b = BigUint::one();

    for _ in 0..n {
        let next = &a + &b;
        a = mem::replace(&mut b, next);
    }

    a
}

/// Draws the first `count` values of the sequence as `u64`.
///
/// Returns [`SequenceError::Overflow`] with the 1-based position of the first
/// value that does not fit. The 93rd value is the largest that does.
pub fn first_u64(count: usize) -> Result<Vec<u64>, SequenceError> {
    Fibonacci::new()
        .take(count)
        .enumerate()
        .map(|(i, value)| {
            value
                .to_u64()
                .ok_or(SequenceError::Overflow { position: i + 1 })
        })
        .collect()
}
