//! Verdict classification.
//!
//! Classification is a pure, deterministic function over captured evidence:
//! verdict = f(stage outcome, marker scan, operation checks). Exit status is
//! ground truth; the marker corroborates it and a disagreement between the
//! two is itself a reportable inconsistency, never silently resolved.

use crate::config::types::{ProbeStatus, VerdictCause};
use crate::exec::runner::RunOutcome;
use crate::verdict::marker::MarkerScan;
use serde::{Deserialize, Serialize};

/// Provenance for a verdict: which evidence produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerdictDetail {
    pub cause: VerdictCause,
    pub evidence_sources: Vec<String>,
    pub exit_code: Option<i32>,
    pub terminating_signal: Option<i32>,
    pub wall_elapsed_ms: u64,
    /// Zero-based stdout index of the marker line, when exactly one exists
    pub marker_line: Option<usize>,
}

fn detail(
    cause: VerdictCause,
    sources: &[&str],
    outcome: &RunOutcome,
    scan: Option<&MarkerScan>,
) -> VerdictDetail {
    VerdictDetail {
        cause,
        evidence_sources: sources.iter().map(|s| s.to_string()).collect(),
        exit_code: outcome.exit_code,
        terminating_signal: outcome.terminating_signal,
        wall_elapsed_ms: outcome.wall_elapsed_ms,
        marker_line: scan.and_then(|s| {
            if s.marker_lines.len() == 1 {
                Some(s.marker_lines[0])
            } else {
                None
            }
        }),
    }
}

/// Classify the compile stage. `None` means the build succeeded and the run
/// stage decides the verdict.
pub fn classify_build(outcome: &RunOutcome) -> Option<(ProbeStatus, VerdictDetail)> {
    if outcome.timed_out {
        return Some((
            ProbeStatus::BuildFailure,
            detail(
                VerdictCause::CompileTimedOut,
                &["watchdog", "wall_time"],
                outcome,
                None,
            ),
        ));
    }
    match outcome.exit_code {
        Some(0) => None,
        _ => Some((
            ProbeStatus::BuildFailure,
            detail(
                VerdictCause::CompileNonzeroExit,
                &["exit_code", "compiler_stderr"],
                outcome,
                None,
            ),
        )),
    }
}

/// Classify the run stage from its outcome, the marker scan over stdout, and
/// the names of canonical operations whose output property failed.
pub fn classify_run(
    outcome: &RunOutcome,
    scan: &MarkerScan,
    failed_operations: &[&'static str],
) -> (ProbeStatus, VerdictDetail) {
    // Watchdog kill takes precedence: a killed probe may surface any exit
    // shape depending on timing.
    if outcome.timed_out {
        return (
            ProbeStatus::TimedOut,
            detail(
                VerdictCause::WatchdogKill,
                &["watchdog", "wall_time"],
                outcome,
                Some(scan),
            ),
        );
    }

    match outcome.exit_code {
        Some(0) => {
            if scan.is_unique_terminal() {
                if failed_operations.is_empty() {
                    (
                        ProbeStatus::Passed,
                        detail(
                            VerdictCause::NormalExit,
                            &["exit_code", "marker"],
                            outcome,
                            Some(scan),
                        ),
                    )
                } else {
                    (
                        ProbeStatus::OutputMismatch,
                        detail(
                            VerdictCause::OperationOutputMismatch,
                            &["exit_code", "marker", "operation_checks"],
                            outcome,
                            Some(scan),
                        ),
                    )
                }
            } else if !scan.marker_present() {
                (
                    ProbeStatus::MarkerMismatch,
                    detail(
                        VerdictCause::MarkerMissing,
                        &["exit_code", "marker"],
                        outcome,
                        Some(scan),
                    ),
                )
            } else if scan.marker_lines.len() > 1 {
                (
                    ProbeStatus::MarkerMismatch,
                    detail(
                        VerdictCause::MarkerDuplicated,
                        &["exit_code", "marker"],
                        outcome,
                        Some(scan),
                    ),
                )
            } else {
                (
                    ProbeStatus::MarkerMismatch,
                    detail(
                        VerdictCause::MarkerNotTerminal,
                        &["exit_code", "marker"],
                        outcome,
                        Some(scan),
                    ),
                )
            }
        }
        Some(_) => {
            if scan.marker_present() {
                // Marker printed but the probe failed: inconsistency, and
                // still a failure because exit status wins.
                (
                    ProbeStatus::MarkerMismatch,
                    detail(
                        VerdictCause::MarkerWithNonzeroExit,
                        &["exit_code", "marker"],
                        outcome,
                        Some(scan),
                    ),
                )
            } else {
                (
                    ProbeStatus::RuntimeFault,
                    detail(
                        VerdictCause::NonzeroExit,
                        &["exit_code"],
                        outcome,
                        Some(scan),
                    ),
                )
            }
        }
        None => {
            if scan.marker_present() {
                (
                    ProbeStatus::MarkerMismatch,
                    detail(
                        VerdictCause::MarkerWithNonzeroExit,
                        &["signal", "marker"],
                        outcome,
                        Some(scan),
                    ),
                )
            } else {
                (
                    ProbeStatus::RuntimeFault,
                    detail(
                        VerdictCause::FatalSignal,
                        &["signal"],
                        outcome,
                        Some(scan),
                    ),
                )
            }
        }
    }
}

/// Verdict for a determinism double-run whose transcripts disagreed.
pub fn classify_nondeterminism(outcome: &RunOutcome) -> (ProbeStatus, VerdictDetail) {
    (
        ProbeStatus::OutputMismatch,
        detail(
            VerdictCause::NondeterministicOutput,
            &["repeat_run", "stdout", "exit_code"],
            outcome,
            None,
        ),
    )
}
