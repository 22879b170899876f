use kanal::{bounded, Receiver};
use num_bigint::BigUint;
use std::thread::{self, JoinHandle};
use tracing::debug;

use crate::error::SequenceError;
use crate::sequence::FibonacciSequence;

/// A [`FibonacciSequence`] running on its own thread.
///
/// The thread keeps at most `capacity` terms buffered ahead of the consumer and
/// stops once the receiving side is dropped.
///
/// # Example
/// ```
/// use fibseq::producer;
/// let mut producer = producer::spawn(0, 4);
/// let first: Vec<u64> = producer
///     .by_ref()
///     .take(5)
///     .map(|(_, term)| u64::try_from(term).unwrap())
///     .collect();
/// assert_eq!(first, [0, 1, 1, 2, 3]);
/// producer.finish().unwrap();
/// ```
pub struct Producer {
    receiver: Receiver<(u64, BigUint)>,
    handle: JoinHandle<u64>,
}

/// Starts producing `(index, term)` pairs from index `start`.
pub fn spawn(start: u64, capacity: usize) -> Producer {
    let (sender, receiver) = bounded::<(u64, BigUint)>(capacity);

    let handle = thread::spawn(move || {
        let mut sequence = FibonacciSequence::starting_at(start);
        let mut sent = 0;
        debug!(start, capacity, "fibonacci producer started");

        loop {
            let index = sequence.index();
            let term = sequence.next_term();
            // Fails only once the consumer has gone away
            if sender.send((index, term)).is_err() {
                break;
            }
            sent += 1;
        }

        debug!(sent, "fibonacci producer stopped");
        sent
    });

    Producer { receiver, handle }
}

impl Producer {
    /// Blocks until the next term is available.
    pub fn recv(&self) -> Option<(u64, BigUint)> {
        self.receiver.recv().ok()
    }

    /// Closes the channel and waits for the thread, returning how many terms it
    /// handed over (including any still buffered when the channel closed).
    pub fn finish(self) -> Result<u64, SequenceError> {
        let Producer { receiver, handle } = self;
        drop(receiver);
        handle
            .join()
            .map_err(|e| SequenceError::StdJoin(format!("Thread panicked: {:?}", e)))
    }
}

impl Iterator for Producer {
    type Item = (u64, BigUint);

    fn next(&mut self) -> Option<Self::Item> {
        self.recv()
    }
}
