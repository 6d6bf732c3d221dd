//! CPU-based worker for the vanity key search.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use crossbeam_channel::Sender;

use crate::crypto::strkey::{self, VersionByte};
use crate::crypto::Keypair;
use crate::matcher::Pattern;

use super::VanityMatch;

/// State shared by every worker of one search.
///
/// The found flag is written exactly once per search; the attempt counter
/// has many writers and is read for reporting once the pool has drained.
/// Both are the only cross-worker mutable state.
#[derive(Debug, Default)]
pub struct SearchState {
    found: AtomicBool,
    attempts: AtomicU64,
}

impl SearchState {
    /// Creates fresh state for one search invocation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true once a worker has claimed a match or a stop was
    /// requested.
    #[inline]
    pub fn is_found(&self) -> bool {
        self.found.load(Ordering::Acquire)
    }

    /// Attempts to claim the search result.
    ///
    /// Returns true for exactly one caller per search; the winner's writes
    /// happen-before any observer sees the flag set.
    #[inline]
    pub fn claim(&self) -> bool {
        self.found
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Stops the search without a result.
    ///
    /// Routed through the same flag the workers poll, so external
    /// cancellation has the same latency as a win.
    pub fn request_stop(&self) {
        self.found.store(true, Ordering::Release);
    }

    /// Records one trial.
    #[inline]
    pub fn record_attempt(&self) {
        self.attempts.fetch_add(1, Ordering::Relaxed);
    }

    /// Returns the total trials across all workers.
    ///
    /// Exact only after every worker has exited.
    pub fn attempts(&self) -> u64 {
        self.attempts.load(Ordering::Relaxed)
    }
}

/// A CPU worker that generates and tests keypairs.
pub struct CpuWorker {
    /// Worker ID
    id: usize,
    /// The pattern to match against
    pattern: Pattern,
    /// Channel to send the winning result
    result_tx: Sender<VanityMatch>,
    /// Shared search state
    state: Arc<SearchState>,
}

impl CpuWorker {
    /// Creates a new CPU worker.
    pub fn new(
        id: usize,
        pattern: Pattern,
        result_tx: Sender<VanityMatch>,
        state: Arc<SearchState>,
    ) -> Self {
        Self {
            id,
            pattern,
            result_tx,
            state,
        }
    }

    /// Runs the worker loop with the system key generator.
    pub fn run(&self) {
        self.run_with(Keypair::generate);
    }

    /// Trial loop over an arbitrary keypair source.
    ///
    /// The shared flag is checked once per trial, so a worker runs at most
    /// one extra trial after another worker wins.
    pub(crate) fn run_with<F>(&self, mut next_keypair: F)
    where
        F: FnMut() -> Keypair,
    {
        while !self.state.is_found() {
            self.state.record_attempt();

            let keypair = next_keypair();
            let encoded = strkey::encode(VersionByte::PublicKey, keypair.public_key());

            if self.pattern.matches(&encoded).is_match() {
                let seed = keypair.seed();

                if self.state.claim() {
                    let result = VanityMatch {
                        public_key: encoded,
                        seed: strkey::encode(VersionByte::Seed, &seed),
                        worker_id: self.id,
                    };

                    // Ignore a closed channel; the search is over either way.
                    let _ = self.result_tx.send(result);
                }

                break;
            }
        }
    }

    /// Returns the worker ID.
    pub fn id(&self) -> usize {
        self.id
    }
}
