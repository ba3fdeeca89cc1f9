//! Run reports: per-probe and aggregate, with JSON and human-readable forms.

use crate::config::types::{OutputIntegrity, ProbeStatus, Result};
use crate::verdict::VerdictDetail;
use serde::{Deserialize, Serialize};

/// Everything the harness learned about one probe run, kept verbatim so a
/// failure can be diagnosed from the report alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeReport {
    pub language: String,
    pub status: ProbeStatus,
    pub verdict: VerdictDetail,
    /// SHA-256 fingerprint of the probe source that was tested
    pub fingerprint: String,
    pub stdout: Vec<String>,
    pub stderr: Vec<String>,
    pub stdout_integrity: OutputIntegrity,
    pub stderr_integrity: OutputIntegrity,
    /// Canonical operations whose output property held
    pub verified_operations: Vec<String>,
    /// Canonical operations whose output property failed
    pub failed_operations: Vec<String>,
    /// Set when the determinism check ran: true iff both runs agreed
    pub deterministic: Option<bool>,
}

/// Aggregate over all selected languages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarnessReport {
    pub results: Vec<ProbeReport>,
    pub passed: usize,
    pub failed: usize,
    pub all_passed: bool,
}

impl HarnessReport {
    pub fn from_results(mut results: Vec<ProbeReport>) -> Self {
        // Deterministic report order regardless of completion order.
        results.sort_by(|a, b| a.language.cmp(&b.language));
        let passed = results.iter().filter(|r| r.status.is_pass()).count();
        let failed = results.len() - passed;
        HarnessReport {
            passed,
            failed,
            all_passed: failed == 0,
            results,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| crate::config::types::HarnessError::Config(e.to_string()))
    }

    /// Human-readable summary, one line per language plus captured output for
    /// anything that failed.
    pub fn render_summary(&self) -> String {
        let mut out = String::new();
        for result in &self.results {
            let glyph = if result.status.is_pass() { "✅" } else { "❌" };
            out.push_str(&format!(
                "{} {:<8} {} ({:?}, {} ms)\n",
                glyph,
                result.language,
                result.status,
                result.verdict.cause,
                result.verdict.wall_elapsed_ms
            ));
            if !result.status.is_pass() {
                for line in &result.stdout {
                    out.push_str(&format!("     stdout | {}\n", line));
                }
                for line in &result.stderr {
                    out.push_str(&format!("     stderr | {}\n", line));
                }
            }
        }
        out.push_str(&format!(
            "\n{} passed, {} failed\n",
            self.passed, self.failed
        ));
        out
    }
}
