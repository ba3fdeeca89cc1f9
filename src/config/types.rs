/// Core types and structures shared across the polyprobe harness
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Harness error taxonomy
#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Toolchain error: {0}")]
    Toolchain(String),

    #[error("Process error: {0}")]
    Process(String),

    #[error("Workspace error: {0}")]
    Workspace(String),

    #[error("unsupported probe language: {0}")]
    UnsupportedLanguage(String),
}

pub type Result<T> = std::result::Result<T, HarnessError>;

/// Terminal classification of one probe run.
///
/// Exit status is ground truth: a nonzero exit is never reclassified as a
/// pass, regardless of what the probe printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbeStatus {
    /// Exit 0 with exactly one success-marker line, and it is the last line.
    Passed,
    /// The toolchain could not produce a runnable binary from the probe.
    BuildFailure,
    /// Nonzero exit or fatal signal with no marker present.
    RuntimeFault,
    /// Exit code and marker disagree: exit 0 without a well-formed terminal
    /// marker, or a marker printed alongside a nonzero exit.
    MarkerMismatch,
    /// The harness watchdog killed a hung probe.
    TimedOut,
    /// Marker and exit agree but a canonical operation printed the wrong
    /// value, or repeated runs produced different output.
    OutputMismatch,
}

impl ProbeStatus {
    pub fn is_pass(self) -> bool {
        matches!(self, ProbeStatus::Passed)
    }
}

impl std::fmt::Display for ProbeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ProbeStatus::Passed => "passed",
            ProbeStatus::BuildFailure => "build_failure",
            ProbeStatus::RuntimeFault => "runtime_fault",
            ProbeStatus::MarkerMismatch => "marker_mismatch",
            ProbeStatus::TimedOut => "timed_out",
            ProbeStatus::OutputMismatch => "output_mismatch",
        };
        f.write_str(s)
    }
}

/// Specific cause backing a [`ProbeStatus`], recorded for provenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerdictCause {
    NormalExit,
    ToolchainMissing,
    CompileNonzeroExit,
    CompileTimedOut,
    NonzeroExit,
    FatalSignal,
    WatchdogKill,
    MarkerMissing,
    MarkerNotTerminal,
    MarkerDuplicated,
    MarkerWithNonzeroExit,
    OperationOutputMismatch,
    NondeterministicOutput,
}

/// Integrity of a collected output stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputIntegrity {
    /// Stream read to EOF within limits
    Complete,
    /// Collection stopped at the harness byte limit
    TruncatedByLimit,
    /// Program closed the stream mid-write
    TruncatedByProgramClose,
    /// Read error on the stream
    ReadError,
}

impl std::fmt::Display for OutputIntegrity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            OutputIntegrity::Complete => "complete",
            OutputIntegrity::TruncatedByLimit => "truncated_by_limit",
            OutputIntegrity::TruncatedByProgramClose => "truncated_by_program_close",
            OutputIntegrity::ReadError => "read_error",
        };
        f.write_str(s)
    }
}

/// Byte limits for stream collection
#[derive(Debug, Clone, Copy)]
pub struct OutputLimits {
    /// Per-stream stdout limit (bytes)
    pub stdout_limit: usize,
    /// Per-stream stderr limit (bytes)
    pub stderr_limit: usize,
}

impl Default for OutputLimits {
    fn default() -> Self {
        // Probes are near-silent; generous limits still catch runaway output.
        OutputLimits {
            stdout_limit: 1024 * 1024,
            stderr_limit: 256 * 1024,
        }
    }
}

/// Execution envelope for one stage (compile or run) of a probe
#[derive(Debug, Clone, Copy)]
pub struct RunEnvelope {
    /// Wall-clock limit enforced by the harness watchdog (milliseconds)
    pub wall_time_limit_ms: u64,
    /// Output collection limits
    pub output_limits: OutputLimits,
}

/// Harness-wide configuration
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// Base directory for run-scoped workspaces
    pub workspace_root: PathBuf,
    /// Run probes on parallel threads (probes share no state)
    pub parallel: bool,
    /// Run each built probe twice and compare stdout + exit code
    pub check_determinism: bool,
    /// Keep workspace artifacts after the run (diagnosis)
    pub keep_artifacts: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        HarnessConfig {
            workspace_root: std::env::temp_dir().join("polyprobe"),
            parallel: true,
            check_determinism: false,
            keep_artifacts: false,
        }
    }
}
