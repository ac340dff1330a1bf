//! Conformance report
//!
//! Collects per-check outcomes into a report the CLI can render as colored
//! text or JSON.

use crate::conformance::error::ConformanceError;
use colored::Colorize;
use serde_json::json;

/// Identity of one conformance check
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display, strum_macros::EnumIter)]
pub enum Check {
    #[strum(serialize = "declares-entry-point")]
    DeclaresEntryPoint,
    #[strum(serialize = "plugin-detected")]
    PluginDetected,
    #[strum(serialize = "dock-widgets")]
    DockWidgets,
    #[strum(serialize = "single-backend")]
    SingleBackend,
    #[strum(serialize = "hook-contribution")]
    HookContribution,
}

/// Outcome of one check
#[derive(Debug, Clone, PartialEq)]
pub enum CheckOutcome {
    Passed,
    Failed(ConformanceError),
    Skipped(String),
}

/// One check paired with its outcome
#[derive(Debug, Clone, PartialEq)]
pub struct CheckResult {
    pub check: Check,
    pub outcome: CheckOutcome,
}

/// The full result of one conformance run
#[derive(Debug, Clone, PartialEq)]
pub struct ConformanceReport {
    pub package: String,
    pub results: Vec<CheckResult>,
}

impl ConformanceReport {
    /// Whether no check failed (skipped checks do not count against a pass)
    pub fn passed(&self) -> bool {
        !self
            .results
            .iter()
            .any(|result| matches!(result.outcome, CheckOutcome::Failed(_)))
    }

    /// The failures, in check order
    pub fn failures(&self) -> impl Iterator<Item = (&CheckResult, &ConformanceError)> {
        self.results.iter().filter_map(|result| match &result.outcome {
            CheckOutcome::Failed(error) => Some((result, error)),
            _ => None,
        })
    }

    fn counts(&self) -> (usize, usize, usize) {
        let mut passed = 0;
        let mut failed = 0;
        let mut skipped = 0;
        for result in &self.results {
            match result.outcome {
                CheckOutcome::Passed => passed += 1,
                CheckOutcome::Failed(_) => failed += 1,
                CheckOutcome::Skipped(_) => skipped += 1,
            }
        }
        (passed, failed, skipped)
    }

    /// Render the report as human-readable text
    pub fn render_text(&self, use_color: bool) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "Conformance report for package '{}'\n",
            self.package
        ));

        for result in &self.results {
            let (tag, detail) = match &result.outcome {
                CheckOutcome::Passed => ("PASS", String::new()),
                CheckOutcome::Failed(error) => ("FAIL", error.to_string()),
                CheckOutcome::Skipped(reason) => ("SKIP", reason.clone()),
            };

            let tag = if use_color {
                match &result.outcome {
                    CheckOutcome::Passed => tag.green().bold().to_string(),
                    CheckOutcome::Failed(_) => tag.red().bold().to_string(),
                    CheckOutcome::Skipped(_) => tag.yellow().to_string(),
                }
            } else {
                tag.to_string()
            };

            if detail.is_empty() {
                out.push_str(&format!("  {} {}\n", tag, result.check));
            } else {
                out.push_str(&format!("  {} {}: {}\n", tag, result.check, detail));
            }
        }

        let (passed, failed, skipped) = self.counts();
        out.push_str(&format!(
            "{} passed, {} failed, {} skipped\n",
            passed, failed, skipped
        ));
        out
    }

    /// Render the report as a JSON document
    pub fn to_json(&self) -> serde_json::Value {
        let checks: Vec<serde_json::Value> = self
            .results
            .iter()
            .map(|result| {
                let (outcome, detail) = match &result.outcome {
                    CheckOutcome::Passed => ("passed", serde_json::Value::Null),
                    CheckOutcome::Failed(error) => ("failed", json!(error.to_string())),
                    CheckOutcome::Skipped(reason) => ("skipped", json!(reason)),
                };
                json!({
                    "check": result.check.to_string(),
                    "outcome": outcome,
                    "detail": detail,
                })
            })
            .collect();

        json!({
            "package": self.package,
            "passed": self.passed(),
            "checks": checks,
        })
    }
}
