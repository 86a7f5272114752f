//! The gate task: assembly, execution, and aggregation wired together.
//!
//! Collaborators are injected at construction; there is no ambient
//! global state. Rebinding configuration is copy-on-configure: a new
//! task value is returned, the original is never mutated.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::context::RunContext;
use crate::error::Result;
use crate::invocation::{ArgumentTemplate, SpecAssembler};
use crate::report::{aggregate, DiagnosticFormatter, Verdict};
use crate::runner::ConcurrentRunner;

/// Immutable per-task configuration.
///
/// Bound to a task at setup, rebound via [`StyleCheckTask::with_config`],
/// read-only during execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskConfig {
    program: PathBuf,
    template: ArgumentTemplate,
    working_dir: PathBuf,
}

impl TaskConfig {
    /// Create a config for the given checker program.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            template: ArgumentTemplate::default(),
            working_dir: PathBuf::from("."),
        }
    }

    /// Set the base argument template.
    pub fn template(mut self, template: ArgumentTemplate) -> Self {
        self.template = template;
        self
    }

    /// Append one template token.
    pub fn arg(mut self, token: impl Into<String>) -> Self {
        self.template = self.template.arg(token);
        self
    }

    /// Set the working directory for checker processes.
    pub fn working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = dir.into();
        self
    }

    /// The checker program.
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// The shared argument template.
    pub fn argument_template(&self) -> &ArgumentTemplate {
        &self.template
    }
}

/// Quality-gate task for one external style checker.
pub struct StyleCheckTask {
    config: TaskConfig,
    runner: Arc<ConcurrentRunner>,
    formatter: Arc<dyn DiagnosticFormatter>,
}

impl StyleCheckTask {
    /// Create a task with explicit collaborators.
    pub fn new(config: TaskConfig, runner: Arc<ConcurrentRunner>, formatter: Arc<dyn DiagnosticFormatter>) -> Self {
        Self {
            config,
            runner,
            formatter,
        }
    }

    /// Return a new task bound to `config`, sharing the collaborators.
    pub fn with_config(&self, config: TaskConfig) -> Self {
        Self {
            config,
            runner: Arc::clone(&self.runner),
            formatter: Arc::clone(&self.formatter),
        }
    }

    /// The currently bound configuration.
    pub fn config(&self) -> &TaskConfig {
        &self.config
    }

    /// Run the gate for `context` and return a single verdict.
    ///
    /// Returns `Err` only for batch aborts (cancellation, timeout) and
    /// internal faults; checker failures are folded into the verdict.
    pub async fn run(&self, context: &RunContext) -> Result<Verdict> {
        let assembler = SpecAssembler::new(
            self.config.program.clone(),
            self.config.template.clone(),
            self.config.working_dir.clone(),
        );
        let specs = assembler.assemble(context);
        tracing::debug!(specs = specs.len(), "assembled batch");

        let outcomes = self.runner.run(specs).await?;
        Ok(aggregate(&outcomes, self.formatter.as_ref()))
    }
}
