//! Bounded fan-out for batches of fetches.
//!
//! Two join strategies share one worker pool:
//! - [`try_join_bounded`] gathers every result or fails with the first error,
//!   used for list and search batches.
//! - [`join_with_fallback`] never fails; each failed job is replaced by its
//!   fallback value, used for localization lookups.
//!
//! At most `limit` tasks run at a time and output order always follows input
//! order, whatever order the tasks complete in.

use std::convert::Infallible;
use std::fmt::Display;
use std::future::Future;
use tokio::task::{JoinError, JoinSet};

pub async fn try_join_bounded<T, E, F>(futures: Vec<F>, limit: usize) -> Result<Vec<T>, E>
where
    F: Future<Output = Result<T, E>> + Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    let limit = limit.max(1);
    let mut slots: Vec<Option<T>> = std::iter::repeat_with(|| None)
        .take(futures.len())
        .collect();
    let mut set = JoinSet::new();

    for (index, future) in futures.into_iter().enumerate() {
        while set.len() >= limit {
            if let Some(joined) = set.join_next().await {
                store(&mut slots, joined)?;
            }
        }
        set.spawn(async move { (index, future.await) });
    }

    while let Some(joined) = set.join_next().await {
        // returning early drops the set, which aborts whatever is still running
        store(&mut slots, joined)?;
    }

    Ok(slots.into_iter().flatten().collect())
}

fn store<T, E>(
    slots: &mut [Option<T>],
    joined: Result<(usize, Result<T, E>), JoinError>,
) -> Result<(), E> {
    match joined {
        Ok((index, outcome)) => {
            slots[index] = Some(outcome?);
            Ok(())
        }
        Err(e) => match e.try_into_panic() {
            Ok(payload) => std::panic::resume_unwind(payload),
            // only reachable while the runtime shuts down; a partial batch is never returned
            Err(e) => panic!("batch task was cancelled: {}", e),
        },
    }
}

pub async fn join_with_fallback<T, E, F>(jobs: Vec<(F, T)>, limit: usize) -> Vec<T>
where
    F: Future<Output = Result<T, E>> + Send + 'static,
    T: Display + Send + 'static,
    E: Display + Send + 'static,
{
    let futures = jobs
        .into_iter()
        .map(|(future, fallback)| async move {
            match future.await {
                Ok(value) => Ok::<T, Infallible>(value),
                Err(e) => {
                    tracing::warn!("Falling back to '{}': {}", fallback, e);
                    Ok(fallback)
                }
            }
        })
        .collect();

    match try_join_bounded(futures, limit).await {
        Ok(values) => values,
        Err(never) => match never {},
    }
}
