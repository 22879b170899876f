use num_bigint::BigUint;
use rayon::iter::{IndexedParallelIterator, IntoParallelIterator, ParallelIterator};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::{self, JoinHandle};
use tracing::debug;

use crate::error::SequenceError;
use crate::sequence::FibonacciSequence;

// Terms `start..end` of the sequence, jumping straight to `start`
fn chunk(start: usize, end: usize) -> Vec<BigUint> {
    FibonacciSequence::starting_at(start as u64)
        .take(end - start)
        .collect()
}

/// The first `count` Fibonacci numbers, computed one after another.
///
/// # Example
/// ```
/// use fibseq::bulk;
/// use num_bigint::BigUint;
/// let terms = bulk::take_terms(10);
/// assert_eq!(terms[9], BigUint::from(34u32));
/// ```
pub fn take_terms(count: usize) -> Vec<BigUint> {
    FibonacciSequence::new().take(count).collect()
}

/// Same result as [`take_terms`], with chunks of `chunk_size` terms computed on the
/// rayon pool. A `chunk_size` of zero is treated as one.
pub fn take_terms_rayon(count: usize, chunk_size: usize) -> Vec<BigUint> {
    let chunk_size = chunk_size.max(1);
    debug!(count, chunk_size, "computing fibonacci prefix with rayon");

    let chunks: Vec<Vec<BigUint>> = (0..count)
        .into_par_iter()
        .step_by(chunk_size)
        .map(|start| chunk(start, (start + chunk_size).min(count)))
        .collect();

    let mut result = Vec::with_capacity(count);
    for part in chunks {
        result.extend(part);
    }
    result
}

/// Same result as [`take_terms`], with each chunk spawned as a tokio task. At most
/// `max_concurrent_tasks` chunks are computed at once.
pub async fn take_terms_tokio(
    count: usize,
    chunk_size: usize,
    max_concurrent_tasks: usize,
) -> Result<Vec<BigUint>, SequenceError> {
    if chunk_size == 0 {
        return Err(SequenceError::InvalidChunkSize);
    }
    debug!(
        count,
        chunk_size, max_concurrent_tasks, "computing fibonacci prefix with tokio"
    );

    let semaphore = Arc::new(Semaphore::new(max_concurrent_tasks.max(1)));
    let mut tasks = vec![];

    for start in (0..count).step_by(chunk_size) {
        let end = (start + chunk_size).min(count);
        let semaphore = Arc::clone(&semaphore);

        let task: JoinHandle<Result<Vec<BigUint>, SequenceError>> = task::spawn(async move {
            let _permit = semaphore.acquire().await?;
            Ok(chunk(start, end))
        });

        tasks.push(task);
    }

    // Tasks were pushed in index order, so awaiting in order keeps the sequence order
    let mut result = Vec::with_capacity(count);
    for task in tasks {
        result.extend(task.await??);
    }

    Ok(result)
}
