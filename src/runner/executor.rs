//! Process execution behind a trait.
//!
//! The runner schedules work through [`ProcessExecutor`] so tests can
//! substitute a mock executor (counting concurrency, faking timings)
//! without spawning real processes.

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::invocation::InvocationSpec;
use crate::runner::outcome::Outcome;

/// Executes a single invocation spec to completion.
#[async_trait]
pub trait ProcessExecutor: Send + Sync {
    /// Run the spec's process and capture its outcome.
    ///
    /// Never fails at the Rust level: spawn errors are folded into the
    /// outcome so one bad invocation cannot abort its siblings.
    async fn execute(&self, index: usize, spec: &InvocationSpec) -> Outcome;
}

/// Executor that spawns real OS processes via tokio.
#[derive(Debug, Default)]
pub struct TokioProcessExecutor;

#[async_trait]
impl ProcessExecutor for TokioProcessExecutor {
    async fn execute(&self, index: usize, spec: &InvocationSpec) -> Outcome {
        let mut cmd = Command::new(spec.program());
        cmd.args(spec.args());
        cmd.current_dir(spec.working_dir());
        cmd.stdout(Stdio::piped()).stderr(Stdio::piped());
        // If the batch is aborted mid-wait the dropped child is killed,
        // so no process outlives the run call.
        cmd.kill_on_drop(true);

        let child = match cmd.spawn() {
            Ok(child) => child,
            Err(e) => {
                tracing::debug!(index, program = %spec.program().display(), error = %e, "spawn failed");
                return Outcome::spawn_failure(index, e.to_string());
            }
        };

        match child.wait_with_output().await {
            Ok(output) => {
                let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
                let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
                if output.status.success() {
                    Outcome::success(index, stdout, stderr)
                } else {
                    Outcome::tool_failure(index, output.status.code(), stdout, stderr)
                }
            }
            Err(e) => Outcome::spawn_failure(index, e.to_string()),
        }
    }
}
