//! Diagnostic rendering.
//!
//! Formatters are pure collaborators: they render already-captured
//! outcome data into messages and remedies, and never re-run anything.
//! Checker output is treated as opaque text.

use crate::runner::outcome::{Disposition, Outcome};

/// Renders a failed outcome into a message and an actionable suggestion.
pub trait DiagnosticFormatter: Send + Sync {
    /// Render the captured output into a readable diagnostic.
    fn format(&self, outcome: &Outcome) -> String;

    /// Render an actionable remedy for the failure.
    fn suggest(&self, outcome: &Outcome) -> String;
}

/// Default formatter for style-checker output.
#[derive(Debug, Clone, Default)]
pub struct StyleDiagnosticFormatter {
    fix_hint: Option<String>,
}

impl StyleDiagnosticFormatter {
    /// Create a formatter with no fix hint.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the command suggested to fix style violations.
    pub fn with_fix_hint(mut self, hint: impl Into<String>) -> Self {
        self.fix_hint = Some(hint.into());
        self
    }
}

impl DiagnosticFormatter for StyleDiagnosticFormatter {
    fn format(&self, outcome: &Outcome) -> String {
        match &outcome.disposition {
            Disposition::SpawnFailure(message) => {
                format!("failed to launch checker: {message}")
            }
            Disposition::ToolFailure(code) => {
                // Prefer stdout; checkers that only write stderr still get shown.
                let body = if outcome.stdout.trim().is_empty() {
                    outcome.stderr.trim()
                } else {
                    outcome.stdout.trim()
                };
                if body.is_empty() {
                    match code {
                        Some(code) => format!("checker exited with code {code} and no output"),
                        None => "checker was killed by a signal".to_string(),
                    }
                } else {
                    body.to_string()
                }
            }
            Disposition::Succeeded => String::new(),
        }
    }

    fn suggest(&self, outcome: &Outcome) -> String {
        match &outcome.disposition {
            Disposition::SpawnFailure(_) => {
                "verify the checker is installed and its path is configured correctly".to_string()
            }
            _ => match &self.fix_hint {
                Some(hint) => format!("run `{hint}` to fix the reported violations"),
                None => "re-run the checker in fix mode to apply the changes".to_string(),
            },
        }
    }
}
