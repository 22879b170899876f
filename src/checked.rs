use num_traits::{Bounded, CheckedAdd, One, Zero};
use tracing::debug;

use crate::error::SequenceError;

/// Fibonacci sequence over a fixed-width integer type.
///
/// Instead of wrapping, the first term that does not fit yields
/// [`SequenceError::Overflow`] and the sequence stays poisoned: every later call
/// returns the same error. The last representable index is 47 for `u32`, 93 for
/// `u64` and 186 for `u128`.
///
/// Only `Bounded` integers are accepted. Unbounded types such as `BigUint` never
/// overflow and belong in [`crate::sequence::FibonacciSequence`].
///
/// # Example
/// ```
/// use fibseq::checked::CheckedSequence;
/// let mut sequence = CheckedSequence::<u8>::new();
/// let fits: Vec<u8> = sequence.by_ref().map_while(Result::ok).collect();
/// assert_eq!(fits.last(), Some(&233));
/// ```
///
/// ```compile_fail
/// use fibseq::checked::CheckedSequence;
/// use num_bigint::BigUint;
/// CheckedSequence::<BigUint>::last_representable_index();
/// ```
#[derive(Clone, Debug)]
pub struct CheckedSequence<T> {
    previous: T,
    current: T,
    index: u64,
    overflowed: bool,
}

impl<T> CheckedSequence<T>
where
    T: Bounded + CheckedAdd + Zero + One + Clone,
{
    pub fn new() -> Self {
        CheckedSequence {
            previous: T::zero(),
            current: T::one(),
            index: 0,
            overflowed: false,
        }
    }

    pub fn try_next(&mut self) -> Result<T, SequenceError> {
        if self.overflowed {
            return Err(SequenceError::Overflow { index: self.index });
        }

        let term = match self.index {
            0 => self.previous.clone(),
            1 => self.current.clone(),
            _ => {
                let Some(next) = self.previous.checked_add(&self.current) else {
                    debug!(index = self.index, "fixed-width fibonacci overflow");
                    self.overflowed = true;
                    return Err(SequenceError::Overflow { index: self.index });
                };
                self.previous = std::mem::replace(&mut self.current, next);
                self.current.clone()
            }
        };
        self.index += 1;
        Ok(term)
    }

    /// Index of the next term, or of the term that overflowed.
    pub fn index(&self) -> u64 {
        self.index
    }

    pub fn is_overflowed(&self) -> bool {
        self.overflowed
    }

    /// Largest `n` such that F(n) fits in `T`.
    pub fn last_representable_index() -> u64 {
        let mut sequence = Self::new();
        while sequence.try_next().is_ok() {}
        sequence.index - 1
    }
}

impl<T> Default for CheckedSequence<T>
where
    T: Bounded + CheckedAdd + Zero + One + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Yields `Ok` terms, then the overflow error once, then `None`.
impl<T> Iterator for CheckedSequence<T>
where
    T: Bounded + CheckedAdd + Zero + One + Clone,
{
    type Item = Result<T, SequenceError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.overflowed {
            return None;
        }
        Some(self.try_next())
    }
}
