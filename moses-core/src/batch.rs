//! Line-parallel helpers
//!
//! Each line is independent for every component in this crate, so a batch
//! is simply mapped over a worker pool and collected back in input order.

use crate::error::Result;

/// Resolve a requested worker count; 0 means one per CPU
pub fn thread_count(requested: usize) -> usize {
    if requested > 0 {
        return requested;
    }
    #[cfg(feature = "parallel")]
    {
        num_cpus::get()
    }
    #[cfg(not(feature = "parallel"))]
    {
        1
    }
}

/// Apply `f` to every line, preserving order
///
/// Runs on a dedicated pool of `threads` workers (0 for one per CPU). A
/// single worker, or a build without the `parallel` feature, maps
/// sequentially on the calling thread.
pub fn map_lines<S, T, F>(lines: &[S], threads: usize, f: F) -> Result<Vec<T>>
where
    S: AsRef<str> + Sync,
    T: Send,
    F: Fn(&str) -> T + Sync + Send,
{
    let threads = thread_count(threads);
    if threads <= 1 || lines.len() <= 1 {
        return Ok(lines.iter().map(|line| f(line.as_ref())).collect());
    }
    map_parallel(lines, threads, f)
}

#[cfg(feature = "parallel")]
fn map_parallel<S, T, F>(lines: &[S], threads: usize, f: F) -> Result<Vec<T>>
where
    S: AsRef<str> + Sync,
    T: Send,
    F: Fn(&str) -> T + Sync + Send,
{
    use rayon::prelude::*;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|i| format!("moses-worker-{i}"))
        .build()
        .map_err(|e| crate::error::Error::ThreadPool(e.to_string()))?;

    tracing::debug!(threads, lines = lines.len(), "mapping batch in parallel");
    let mapped: Vec<T> = pool.install(|| lines.par_iter().map(|line| f(line.as_ref())).collect());
    Ok(mapped)
}

#[cfg(not(feature = "parallel"))]
fn map_parallel<S, T, F>(lines: &[S], _threads: usize, f: F) -> Result<Vec<T>>
where
    S: AsRef<str> + Sync,
    T: Send,
    F: Fn(&str) -> T + Sync + Send,
{
    Ok(lines.iter().map(|line| f(line.as_ref())).collect())
}
