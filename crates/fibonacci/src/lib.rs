//! Lazy Fibonacci sequence producer.
//!
//! [`fibonacci::Fibonacci`] yields 1, 1, 2, 3, 5, ... forever, keeping only the
//! two most recent values. Values are arbitrary precision, so the sequence
//! never overflows; [`fibonacci::first_u64`] narrows a prefix to `u64` when a
//! caller needs fixed-width numbers.

pub mod error;
pub mod fibonacci;

pub use error::SequenceError;
pub use fibonacci::{fibonacci, first_u64, Fibonacci};
