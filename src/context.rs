//! Run context supplied by the caller.
//!
//! The caller decides which files to check and in what mode; file
//! discovery (git staging area, project walk) lives outside this crate.

use std::path::PathBuf;

/// Which files to check and how the checker is invoked over them.
///
/// A closed set of modes, matched exhaustively wherever it is consumed.
/// Adding a mode is a compile-time-checked change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunContext {
    /// Check the entire file set with a single checker invocation.
    WholeSet(Vec<PathBuf>),

    /// Check each changed file with its own invocation, in the given order.
    ChangedFiles(Vec<PathBuf>),
}

impl RunContext {
    /// The files this context covers, in caller-supplied order.
    pub fn files(&self) -> &[PathBuf] {
        match self {
            RunContext::WholeSet(files) => files,
            RunContext::ChangedFiles(files) => files,
        }
    }

    /// Check if the context covers no files at all.
    pub fn is_empty(&self) -> bool {
        self.files().is_empty()
    }
}
