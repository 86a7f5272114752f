//! Concurrent batch runner.
//!
//! Executes a batch of invocation specs with bounded parallelism.
//! Scheduling is keep-going: one process failing (or failing to spawn)
//! never cancels or blocks its siblings. Completion order is unspecified;
//! the returned outcomes are always aligned with the submitted specs by
//! index.

pub mod executor;
pub mod outcome;

pub use executor::{ProcessExecutor, TokioProcessExecutor};
pub use outcome::{Disposition, Outcome};

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::error::{GateError, Result};
use crate::invocation::InvocationSpec;

/// Default wall-clock bound for a whole batch.
const DEFAULT_BATCH_TIMEOUT: Duration = Duration::from_secs(300);

/// Upper cap on the default parallelism.
const DEFAULT_JOBS_CAP: usize = 8;

/// Configuration for the concurrent runner.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Maximum processes in flight simultaneously. Must be >= 1.
    pub max_concurrent: usize,
    /// Wall-clock timeout for the whole batch. Expiry aborts the batch
    /// like a cancellation; there is no per-invocation timeout.
    pub batch_timeout: Duration,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            max_concurrent: default_jobs(),
            batch_timeout: DEFAULT_BATCH_TIMEOUT,
        }
    }
}

impl RunnerConfig {
    /// Set the parallelism bound.
    pub fn jobs(mut self, jobs: usize) -> Self {
        self.max_concurrent = jobs;
        self
    }

    /// Set the batch timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.batch_timeout = timeout;
        self
    }
}

/// Default parallelism: available cores, capped.
pub fn default_jobs() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get().min(DEFAULT_JOBS_CAP))
        .unwrap_or(4)
}

/// Runs batches of invocation specs with bounded parallelism.
pub struct ConcurrentRunner {
    executor: Arc<dyn ProcessExecutor>,
    config: RunnerConfig,
    cancel: CancellationToken,
}

impl ConcurrentRunner {
    /// Create a runner backed by real OS processes.
    pub fn new(config: RunnerConfig) -> Self {
        Self::with_executor(Arc::new(TokioProcessExecutor), config)
    }

    /// Create a runner with an explicit executor (tests inject mocks here).
    pub fn with_executor(executor: Arc<dyn ProcessExecutor>, config: RunnerConfig) -> Self {
        Self {
            executor,
            config,
            cancel: CancellationToken::new(),
        }
    }

    /// Token the caller can use to abort an in-flight batch.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Execute every spec and return outcomes aligned with the input.
    ///
    /// Blocks until all specs complete, the batch times out, or the
    /// cancellation token fires. On abort every still-running child is
    /// killed and the call returns [`GateError::Cancelled`] or
    /// [`GateError::TimedOut`] instead of outcomes.
    pub async fn run(&self, specs: Vec<InvocationSpec>) -> Result<Vec<Outcome>> {
        if self.config.max_concurrent == 0 {
            return Err(GateError::Config("max_concurrent must be >= 1".to_string()));
        }

        let total = specs.len();
        if total == 0 {
            return Ok(Vec::new());
        }

        tracing::debug!(total, jobs = self.config.max_concurrent, "starting batch");

        let semaphore = Arc::new(Semaphore::new(self.config.max_concurrent));
        let mut join_set = JoinSet::new();

        for (index, spec) in specs.into_iter().enumerate() {
            let semaphore = Arc::clone(&semaphore);
            let executor = Arc::clone(&self.executor);
            join_set.spawn(async move {
                let _permit = match semaphore.acquire_owned().await {
                    Ok(permit) => permit,
                    Err(_) => return Outcome::spawn_failure(index, "scheduler shut down"),
                };
                executor.execute(index, &spec).await
            });
        }

        // One slot per spec index, written exactly once.
        let mut slots: Vec<Option<Outcome>> = std::iter::repeat_with(|| None).take(total).collect();
        let mut remaining = total;

        let deadline = tokio::time::sleep(self.config.batch_timeout);
        tokio::pin!(deadline);

        while remaining > 0 {
            tokio::select! {
                () = self.cancel.cancelled() => {
                    tracing::debug!(remaining, "batch cancelled, reaping children");
                    join_set.shutdown().await;
                    return Err(GateError::Cancelled);
                }
                () = &mut deadline => {
                    tracing::debug!(remaining, "batch timed out, reaping children");
                    join_set.shutdown().await;
                    return Err(GateError::TimedOut {
                        secs: self.config.batch_timeout.as_secs(),
                    });
                }
                joined = join_set.join_next() => {
                    match joined {
                        Some(Ok(outcome)) => {
                            let index = outcome.index;
                            tracing::debug!(index, succeeded = outcome.succeeded(), "invocation finished");
                            slots[index] = Some(outcome);
                            remaining -= 1;
                        }
                        Some(Err(e)) => {
                            join_set.shutdown().await;
                            return Err(GateError::Runner(e.to_string()));
                        }
                        None => break,
                    }
                }
            }
        }

        slots
            .into_iter()
            .map(|slot| slot.ok_or_else(|| GateError::Runner("missing outcome slot".to_string())))
            .collect()
    }
}
