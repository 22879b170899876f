use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::math::fibonacci_pair;

/// Rolling state of a [`FibonacciSequence`].
///
/// Once `index >= 2`, `current` is the last term produced and `previous` the one
/// before it. Earlier than that the pair still holds the seeds `0` and `1`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SequenceState {
    pub previous: BigUint,
    pub current: BigUint,
    pub index: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SequencePhase {
    /// No term has been requested yet.
    Uninitialized,
    Running,
}

/// Lazy, unbounded Fibonacci sequence over arbitrary precision integers.
///
/// Terms follow F(0) = 0, F(1) = 1, F(n) = F(n-1) + F(n-2). Only the last two terms
/// are kept between requests, and the sequence never ends on its own: bound it with
/// `take`, `take_while` or your own loop.
///
/// # Example
/// ```
/// use fibseq::sequence::FibonacciSequence;
/// use num_bigint::BigUint;
/// let under_100: Vec<BigUint> = FibonacciSequence::new()
///     .take_while(|term| *term <= BigUint::from(100u32))
///     .collect();
/// assert_eq!(under_100.len(), 12);
/// assert_eq!(under_100[11], BigUint::from(89u32));
/// ```
#[derive(Clone, Debug)]
pub struct FibonacciSequence {
    state: SequenceState,
}

impl FibonacciSequence {
    pub fn new() -> Self {
        FibonacciSequence {
            state: SequenceState {
                previous: BigUint::zero(),
                current: BigUint::one(),
                index: 0,
            },
        }
    }

    /// Positions a fresh sequence so that its next term is F(`n`).
    ///
    /// The two boundary terms come from matrix exponentiation, so this costs
    /// O(log n) big-integer multiplications instead of `n` additions.
    pub fn starting_at(n: u64) -> Self {
        if n < 2 {
            let mut sequence = Self::new();
            for _ in 0..n {
                sequence.next_term();
            }
            return sequence;
        }

        let (previous, current) = fibonacci_pair(n - 2);
        FibonacciSequence {
            state: SequenceState {
                previous,
                current,
                index: n,
            },
        }
    }

    /// Produces the next term and advances the state by one step.
    pub fn next_term(&mut self) -> BigUint {
        let state = &mut self.state;
        let term = match state.index {
            0 => state.previous.clone(),
            1 => state.current.clone(),
            _ => {
                let next = &state.previous + &state.current;
                state.previous = std::mem::replace(&mut state.current, next);
                state.current.clone()
            }
        };
        state.index += 1;
        term
    }

    /// Number of terms produced so far; also the index of the next term.
    pub fn index(&self) -> u64 {
        self.state.index
    }

    pub fn phase(&self) -> SequencePhase {
        if self.state.index == 0 {
            SequencePhase::Uninitialized
        } else {
            SequencePhase::Running
        }
    }

    pub fn state(&self) -> &SequenceState {
        &self.state
    }

    /// The terms that do not exceed `bound`. The first term past the bound is
    /// computed and dropped.
    pub fn terms_up_to(bound: BigUint) -> impl Iterator<Item = BigUint> {
        Self::new().take_while(move |term| *term <= bound)
    }
}

impl Default for FibonacciSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FibonacciSequence {
    type Item = BigUint;

    fn next(&mut self) -> Option<BigUint> {
        Some(self.next_term())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small(terms: impl Iterator<Item = BigUint>) -> Vec<u64> {
        terms.map(|t| u64::try_from(t).unwrap()).collect()
    }

    #[test]
    fn two_terms() {
        assert_eq!(small(FibonacciSequence::new().take(2)), [0, 1]);
    }

    #[test]
    fn first_ten() {
        assert_eq!(
            small(FibonacciSequence::new().take(10)),
            [0, 1, 1, 2, 3, 5, 8, 13, 21, 34]
        );
    }

    #[test]
    fn stops_past_100() {
        let terms = small(FibonacciSequence::terms_up_to(BigUint::from(100u32)));
        assert_eq!(terms, [0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89]);
    }

    #[test]
    fn consumer_loop_computes_then_drops_144() {
        let mut sequence = FibonacciSequence::new();
        let mut printed = vec![];
        loop {
            let term = sequence.next_term();
            if term > BigUint::from(100u32) {
                assert_eq!(term, BigUint::from(144u32));
                break;
            }
            printed.push(term);
        }
        assert_eq!(printed.len(), 12);
        assert_eq!(sequence.index(), 13);
    }

    #[test]
    fn phase_transitions_once() {
        let mut sequence = FibonacciSequence::new();
        assert_eq!(sequence.phase(), SequencePhase::Uninitialized);
        sequence.next_term();
        assert_eq!(sequence.phase(), SequencePhase::Running);
        sequence.next_term();
        sequence.next_term();
        assert_eq!(sequence.phase(), SequencePhase::Running);
    }

    #[test]
    fn state_tracks_last_two_terms() {
        let mut sequence = FibonacciSequence::new();
        for _ in 0..8 {
            sequence.next_term();
        }
        let state = sequence.state();
        assert_eq!(state.index, 8);
        assert_eq!(state.previous, BigUint::from(8u32));
        assert_eq!(state.current, BigUint::from(13u32));
    }

    #[test]
    fn starting_at_small_indices() {
        for n in 0..5u64 {
            let jumped: Vec<BigUint> = FibonacciSequence::starting_at(n).take(6).collect();
            let walked: Vec<BigUint> = FibonacciSequence::new().skip(n as usize).take(6).collect();
            assert_eq!(jumped, walked, "start {n}");
        }
    }

    #[test]
    fn starting_at_keeps_index() {
        let mut sequence = FibonacciSequence::starting_at(100);
        assert_eq!(sequence.index(), 100);
        assert_eq!(sequence.next_term().to_string(), "354224848179261915075");
        assert_eq!(sequence.index(), 101);
    }

    #[test]
    fn ten_thousand_terms() {
        let last = FibonacciSequence::new().nth(9_999).unwrap();
        let (expected, _) = fibonacci_pair(9_999);
        assert_eq!(last, expected);
    }
}
