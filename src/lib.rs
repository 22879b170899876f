//! # Fibonacci Sequence Library
//!
//! This library produces the Fibonacci sequence lazily: a [`sequence::FibonacciSequence`]
//! hands out one term per request and keeps only the last two terms between requests.
//! The sequence never ends by itself; the caller decides when enough terms were taken.
//!
//! ## Key Features
//! - **Lazy production**: `FibonacciSequence` is an infinite `Iterator` over `BigUint`, so
//!   it never overflows and composes with `take`, `take_while` and friends.
//! - **Fixed-width variant**: `CheckedSequence<T>` runs the same recurrence over primitive
//!   integers and reports `Overflow` instead of wrapping.
//! - **Matrix jump**: a sequence can be positioned at any index in O(log n) big-integer
//!   multiplications using 2x2 matrix exponentiation.
//! - **Bulk prefixes**: the first `count` terms can be materialized sequentially, on the
//!   rayon pool, or as tokio tasks, each chunk jumping straight to its start.
//! - **Producer thread**: a sequence can run on its own thread and feed a consumer through
//!   a bounded `kanal` channel.
//!
//! ## Overview of Modules
//!
//! #### `sequence`
//! `FibonacciSequence`, its `SequenceState` snapshot and `SequencePhase`.
//!
//! #### `checked`
//! `CheckedSequence<T>` for `u32`, `u64`, `u128` and any other `CheckedAdd` integer.
//!
//! #### `math`
//! `Matrix` and `fibonacci_pair`, returning `(F(n), F(n+1))`.
//!
//! #### `bulk`
//! `take_terms`, `take_terms_rayon` and `take_terms_tokio`.
//!
//! #### `producer`
//! `spawn` and the `Producer` handle.
//!
//! #### `error`
//! `SequenceError`: overflow, invalid chunk sizes, and the join and acquire failures of the
//! concurrent helpers.
//!
//! ## Usage Example
//! ```rust
//! use fibseq::sequence::FibonacciSequence;
//! use num_bigint::BigUint;
//! let mut sequence = FibonacciSequence::new();
//! let mut printed = vec![];
//! loop {
//!     let term = sequence.next_term();
//!     if term > BigUint::from(100u32) {
//!         break;
//!     }
//!     printed.push(term);
//! }
//! assert_eq!(printed.len(), 12);
//! ```

pub mod app;
pub mod bulk;
pub mod checked;
pub mod config;
pub mod error;
pub mod math;
pub mod producer;
pub mod sequence;

pub use error::SequenceError;
pub use sequence::FibonacciSequence;
