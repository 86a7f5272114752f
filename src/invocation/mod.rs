//! Invocation specs and spec assembly.
//!
//! An [`InvocationSpec`] is an immutable description of one external
//! checker call. The [`SpecAssembler`] turns a run context plus a shared
//! argument template into the full batch of specs, which is then handed
//! to the runner as a whole.

use std::path::{Path, PathBuf};

use crate::context::RunContext;

/// Ordered flag/value tokens shared by every invocation.
///
/// No file token is embedded; the assembler appends those.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentTemplate {
    tokens: Vec<String>,
}

impl ArgumentTemplate {
    /// Create a template from ordered tokens.
    pub fn new(tokens: Vec<String>) -> Self {
        Self { tokens }
    }

    /// Append a token.
    pub fn arg(mut self, token: impl Into<String>) -> Self {
        self.tokens.push(token.into());
        self
    }

    /// The ordered tokens.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

/// Immutable description of one external-process call.
///
/// One spec corresponds to exactly one process execution; the runner
/// consumes it and reports a single outcome for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationSpec {
    program: PathBuf,
    args: Vec<String>,
    working_dir: PathBuf,
    target: Option<PathBuf>,
}

impl InvocationSpec {
    fn new(program: PathBuf, args: Vec<String>, working_dir: PathBuf, target: Option<PathBuf>) -> Self {
        Self {
            program,
            args,
            working_dir,
            target,
        }
    }

    /// Program to execute.
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Ordered argument tokens, file tokens included.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Directory the process runs in.
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// The single file this spec targets, if it was assembled per-file.
    pub fn target(&self) -> Option<&Path> {
        self.target.as_deref()
    }
}

/// Builds the batch of invocation specs for a run context.
#[derive(Debug, Clone)]
pub struct SpecAssembler {
    program: PathBuf,
    template: ArgumentTemplate,
    working_dir: PathBuf,
}

impl SpecAssembler {
    /// Create an assembler for the given checker program and template.
    pub fn new(program: impl Into<PathBuf>, template: ArgumentTemplate, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            template,
            working_dir: working_dir.into(),
        }
    }

    /// Assemble the full batch of specs for `context`.
    ///
    /// Whole-set mode yields exactly one spec with every file appended to
    /// the template. Changed-files mode yields one spec per file, each
    /// with a single file token appended. An empty changed-files list
    /// yields an empty batch (trivial pass). Pure; no side effects.
    pub fn assemble(&self, context: &RunContext) -> Vec<InvocationSpec> {
        match context {
            RunContext::WholeSet(files) => {
                let mut args = self.template.tokens().to_vec();
                args.extend(files.iter().map(|f| f.display().to_string()));
                vec![InvocationSpec::new(
                    self.program.clone(),
                    args,
                    self.working_dir.clone(),
                    None,
                )]
            }
            RunContext::ChangedFiles(files) => files
                .iter()
                .map(|file| {
                    let mut args = self.template.tokens().to_vec();
                    args.push(file.display().to_string());
                    InvocationSpec::new(
                        self.program.clone(),
                        args,
                        self.working_dir.clone(),
                        Some(file.clone()),
                    )
                })
                .collect(),
        }
    }
}
