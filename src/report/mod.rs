//! Verdict aggregation.
//!
//! Reduces a batch of outcomes into a single pass/fail verdict with
//! ordered diagnostics. Diagnostics are ordered by original spec index,
//! never by completion time, so repeated runs produce diffable reports.

pub mod format;

pub use format::{DiagnosticFormatter, StyleDiagnosticFormatter};

use crate::runner::Outcome;

/// One rendered diagnostic for a failed invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Human-readable description of what failed.
    pub message: String,
    /// Actionable remedy (e.g. a corrective command).
    pub suggestion: String,
}

/// Final pass/fail decision for a batch.
///
/// Immutable once constructed; the gate returns exactly one per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    passed: bool,
    diagnostics: Vec<Diagnostic>,
}

impl Verdict {
    /// Whether every invocation in the batch succeeded.
    pub fn passed(&self) -> bool {
        self.passed
    }

    /// Diagnostics for failed invocations, in spec-index order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

/// Reduce outcomes to a verdict.
///
/// Passed iff every outcome succeeded; an empty batch passes. Failed
/// outcomes contribute one diagnostic each, in ascending spec-index
/// order regardless of the order outcomes arrive in.
pub fn aggregate(outcomes: &[Outcome], formatter: &dyn DiagnosticFormatter) -> Verdict {
    let mut failed: Vec<&Outcome> = outcomes.iter().filter(|o| !o.succeeded()).collect();
    failed.sort_by_key(|o| o.index);

    let diagnostics: Vec<Diagnostic> = failed
        .into_iter()
        .map(|outcome| Diagnostic {
            message: formatter.format(outcome),
            suggestion: formatter.suggest(outcome),
        })
        .collect();

    Verdict {
        passed: diagnostics.is_empty(),
        diagnostics,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::outcome::Outcome;

    fn formatter() -> StyleDiagnosticFormatter {
        StyleDiagnosticFormatter::new()
    }

    #[test]
    fn test_empty_batch_passes() {
        let verdict = aggregate(&[], &formatter());
        assert!(verdict.passed());
        assert!(verdict.diagnostics().is_empty());
    }

    #[test]
    fn test_all_success_passes() {
        let outcomes = vec![
            Outcome::success(0, String::new(), String::new()),
            Outcome::success(1, String::new(), String::new()),
        ];
        let verdict = aggregate(&outcomes, &formatter());
        assert!(verdict.passed());
        assert!(verdict.diagnostics().is_empty());
    }

    #[test]
    fn test_single_failure_single_diagnostic() {
        let outcomes = vec![
            Outcome::success(0, String::new(), String::new()),
            Outcome::tool_failure(1, Some(1), "bad indent in b.rs".to_string(), String::new()),
            Outcome::success(2, String::new(), String::new()),
        ];
        let verdict = aggregate(&outcomes, &formatter());

        assert!(!verdict.passed());
        assert_eq!(verdict.diagnostics().len(), 1);
        assert!(verdict.diagnostics()[0].message.contains("bad indent in b.rs"));
    }

    #[test]
    fn test_diagnostics_ordered_by_spec_index() {
        // Outcomes arrive in completion order; diagnostics must not.
        let outcomes = vec![
            Outcome::tool_failure(4, Some(1), "fourth".to_string(), String::new()),
            Outcome::tool_failure(0, Some(1), "zeroth".to_string(), String::new()),
            Outcome::success(1, String::new(), String::new()),
            Outcome::tool_failure(2, Some(1), "second".to_string(), String::new()),
        ];
        let verdict = aggregate(&outcomes, &formatter());

        assert_eq!(verdict.diagnostics().len(), 3);
        assert!(verdict.diagnostics()[0].message.contains("zeroth"));
        assert!(verdict.diagnostics()[1].message.contains("second"));
        assert!(verdict.diagnostics()[2].message.contains("fourth"));
    }

    #[test]
    fn test_spawn_failures_fail_the_verdict() {
        let outcomes = vec![
            Outcome::spawn_failure(0, "No such file or directory"),
            Outcome::spawn_failure(1, "Permission denied"),
        ];
        let verdict = aggregate(&outcomes, &formatter());

        assert!(!verdict.passed());
        assert_eq!(verdict.diagnostics().len(), 2);
    }
}
