//! Worker pool management.

use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crossbeam_channel::{bounded, Receiver};

use crate::matcher::Pattern;

use super::cpu::{CpuWorker, SearchState};

/// Result of a successful vanity key search.
#[derive(Debug, Clone)]
pub struct VanityMatch {
    /// The StrKey-encoded public key (`G...`)
    pub public_key: String,
    /// The StrKey-encoded secret seed (`S...`)
    pub seed: String,
    /// The ID of the worker that found this result
    pub worker_id: usize,
}

/// Manages a pool of workers racing to find one matching keypair.
pub struct WorkerPool {
    /// Number of workers
    num_workers: usize,
    /// The pattern being searched for
    pattern: Pattern,
    /// Worker thread handles (Option to allow taking during join)
    handles: Option<Vec<JoinHandle<()>>>,
    /// Channel receiver for the winning result
    result_rx: Receiver<VanityMatch>,
    /// Shared search state
    state: Arc<SearchState>,
    /// Start time
    start_time: Instant,
}

impl WorkerPool {
    /// Creates a new worker pool and launches its workers.
    pub fn new(num_workers: usize, pattern: Pattern) -> Self {
        // At most one worker ever sends.
        let (result_tx, result_rx) = bounded(1);
        let state = Arc::new(SearchState::new());

        let handles = (0..num_workers)
            .map(|id| {
                let pattern = pattern.clone();
                let result_tx = result_tx.clone();
                let state = state.clone();

                thread::Builder::new()
                    .name(format!("vanity-worker-{}", id))
                    .spawn(move || {
                        let worker = CpuWorker::new(id, pattern, result_tx, state);
                        worker.run();
                    })
                    .expect("Failed to spawn worker thread")
            })
            .collect();

        Self {
            num_workers,
            pattern,
            handles: Some(handles),
            result_rx,
            state,
            start_time: Instant::now(),
        }
    }

    /// Waits for the winning result with a timeout.
    ///
    /// Returns `None` if the timeout expires or every worker has exited
    /// without a result.
    pub fn wait_for_result(&self, timeout: Duration) -> Option<VanityMatch> {
        self.result_rx.recv_timeout(timeout).ok()
    }

    /// Signals all workers to stop without a result.
    pub fn stop(&self) {
        self.state.request_stop();
    }

    /// Returns true if the search is over (match claimed or stop requested).
    pub fn is_stopped(&self) -> bool {
        self.state.is_found()
    }

    /// Waits for all workers to exit and returns the final attempt count.
    pub fn join(mut self) -> u64 {
        self.stop();
        if let Some(handles) = self.handles.take() {
            for handle in handles {
                let _ = handle.join();
            }
        }
        self.state.attempts()
    }

    /// Returns the number of workers.
    pub fn num_workers(&self) -> usize {
        self.num_workers
    }

    /// Returns the pattern being searched for.
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Returns the attempts made so far across all workers.
    pub fn attempts(&self) -> u64 {
        self.state.attempts()
    }

    /// Returns the elapsed time since the pool was created.
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Returns the current trial rate (attempts per second).
    pub fn attempts_per_second(&self) -> f64 {
        let elapsed = self.elapsed().as_secs_f64();
        if elapsed > 0.0 {
            self.attempts() as f64 / elapsed
        } else {
            0.0
        }
    }

    /// Returns a handle to the shared state for external use (e.g. signal
    /// handlers).
    pub fn state_handle(&self) -> Arc<SearchState> {
        self.state.clone()
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        self.stop();
        // Wait for workers to finish if they haven't been joined
        if let Some(handles) = self.handles.take() {
            for handle in handles {
                let _ = handle.join();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::PatternType;

    #[test]
    fn test_single_winner_regardless_of_worker_count() {
        // Every encoded public key starts with G, so a "G" prefix matches
        // on the very first trial of every worker.
        for workers in [1, 2, 8] {
            let pattern = Pattern::compile("G", PatternType::Prefix).unwrap();
            let pool = WorkerPool::new(workers, pattern);

            let result = pool
                .wait_for_result(Duration::from_secs(30))
                .expect("a match on the first trial");
            assert!(result.public_key.starts_with('G'));
            assert!(result.seed.starts_with('S'));
            assert!(result.worker_id < workers);

            // Only the claim winner reports, even though every worker
            // matched.
            assert!(pool.wait_for_result(Duration::from_secs(5)).is_none());

            // Each worker runs at most one trial before observing the flag.
            let attempts = pool.join();
            assert!(attempts >= 1);
            assert!(attempts <= workers as u64);
        }
    }

    #[test]
    fn test_stop_drains_without_result() {
        // An unsatisfiable 56-symbol suffix: encoded keys are 56 chars and
        // start with G, this term does not.
        let term = "A".repeat(56);
        let pattern = Pattern::compile(&term, PatternType::Suffix).unwrap();
        let pool = WorkerPool::new(2, pattern);

        pool.stop();
        assert!(pool.is_stopped());
        assert!(pool.wait_for_result(Duration::from_secs(5)).is_none());
        pool.join();
    }
}
