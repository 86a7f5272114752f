//! Captured result of executing one invocation spec.

/// How one invocation's process ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Disposition {
    /// Process ran and exited zero.
    Succeeded,

    /// Process ran and exited nonzero; the checker reported violations.
    /// The code is absent when the process was killed by a signal.
    ToolFailure(Option<i32>),

    /// Process never ran: executable missing, permission denied, or the
    /// spawn failed for another OS reason. A misconfiguration, not a
    /// style violation.
    SpawnFailure(String),
}

/// Captured result of one invocation.
///
/// `index` is the spec's position in the submitted batch; outcomes are
/// produced in arbitrary completion order but always retain it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Originating spec index in the submitted batch.
    pub index: usize,
    /// How the process ended.
    pub disposition: Disposition,
    /// Captured stdout, lossily decoded.
    pub stdout: String,
    /// Captured stderr, lossily decoded.
    pub stderr: String,
}

impl Outcome {
    /// Outcome for a zero exit.
    pub fn success(index: usize, stdout: String, stderr: String) -> Self {
        Self {
            index,
            disposition: Disposition::Succeeded,
            stdout,
            stderr,
        }
    }

    /// Outcome for a nonzero exit.
    pub fn tool_failure(index: usize, code: Option<i32>, stdout: String, stderr: String) -> Self {
        Self {
            index,
            disposition: Disposition::ToolFailure(code),
            stdout,
            stderr,
        }
    }

    /// Outcome for a process that could not be spawned.
    pub fn spawn_failure(index: usize, message: impl Into<String>) -> Self {
        Self {
            index,
            disposition: Disposition::SpawnFailure(message.into()),
            stdout: String::new(),
            stderr: String::new(),
        }
    }

    /// Check if this invocation passed.
    pub fn succeeded(&self) -> bool {
        matches!(self.disposition, Disposition::Succeeded)
    }

    /// Check if this invocation failed to launch at all.
    pub fn is_spawn_failure(&self) -> bool {
        matches!(self.disposition, Disposition::SpawnFailure(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_outcome() {
        let outcome = Outcome::success(3, "ok".to_string(), String::new());
        assert_eq!(outcome.index, 3);
        assert!(outcome.succeeded());
        assert!(!outcome.is_spawn_failure());
    }

    #[test]
    fn test_tool_failure_outcome() {
        let outcome = Outcome::tool_failure(0, Some(1), String::new(), "bad style".to_string());
        assert!(!outcome.succeeded());
        assert!(!outcome.is_spawn_failure());
        assert_eq!(outcome.disposition, Disposition::ToolFailure(Some(1)));
    }

    #[test]
    fn test_signal_kill_has_no_code() {
        let outcome = Outcome::tool_failure(0, None, String::new(), String::new());
        assert_eq!(outcome.disposition, Disposition::ToolFailure(None));
    }

    #[test]
    fn test_spawn_failure_outcome() {
        let outcome = Outcome::spawn_failure(1, "No such file or directory");
        assert!(!outcome.succeeded());
        assert!(outcome.is_spawn_failure());
        assert!(outcome.stdout.is_empty());
        assert!(outcome.stderr.is_empty());
    }
}
