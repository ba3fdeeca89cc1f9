//! Harness orchestration.
//!
//! Drives each probe through its lifecycle: workspace → source → compile →
//! run → classify → verify canonical output properties. Probes share no
//! state, so the harness runs them on independent threads by default and
//! fans results in over a channel.

pub mod workspace;

use crate::config::types::{HarnessConfig, HarnessError, ProbeStatus, Result};
use crate::exec::runner::{self, LaunchSpec, RunOutcome};
use crate::lang::registry;
use crate::probe::catalog;
use crate::probe::contract::ProbeSpec;
use crate::report::{HarnessReport, ProbeReport};
use crate::verdict::{self, VerdictDetail};
use crossbeam_channel::unbounded;
use self::workspace::ProbeWorkspace;

pub struct Harness {
    config: HarnessConfig,
}

impl Harness {
    pub fn new(config: HarnessConfig) -> Result<Self> {
        std::fs::create_dir_all(&config.workspace_root).map_err(|e| {
            HarnessError::Workspace(format!(
                "failed to create workspace root {}: {}",
                config.workspace_root.display(),
                e
            ))
        })?;
        Ok(Harness { config })
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Run one probe end to end and report the verdict.
    pub fn run_probe(&self, language: &str) -> Result<ProbeReport> {
        let tag = registry::canonical_tag(language)?;
        let probe = catalog::probe_for(tag)?;
        let adapter = registry::adapter_for(tag)?;

        let workspace =
            ProbeWorkspace::new(&self.config.workspace_root, self.config.keep_artifacts)?;
        workspace.write_source(probe.source_file, probe.source)?;
        log::info!(
            "probe {}: workspace {} fingerprint {}",
            tag,
            workspace.run_id(),
            probe.fingerprint()
        );

        let compile_command = adapter.compile_command(&workspace);
        if !compile_command.is_empty() {
            let outcome = match runner::launch(&LaunchSpec {
                command: compile_command,
                workdir: workspace.run_dir().to_path_buf(),
                envelope: adapter.compile_envelope(),
            }) {
                Ok(outcome) => outcome,
                // A compiler that cannot even be spawned is a build failure
                // for this language, not a harness failure.
                Err(HarnessError::Process(msg)) => {
                    log::warn!("probe {}: toolchain missing ({})", tag, msg);
                    return Ok(toolchain_failure_report(probe, msg));
                }
                Err(e) => return Err(e),
            };
            if let Some((status, detail)) = verdict::classify_build(&outcome) {
                log::warn!("probe {}: build failed ({:?})", tag, detail.cause);
                return Ok(make_report(probe, status, detail, &outcome, &[], &[], None));
            }
        }

        let run_spec = LaunchSpec {
            command: adapter.run_command(&workspace),
            workdir: workspace.run_dir().to_path_buf(),
            envelope: adapter.run_envelope(),
        };
        let outcome = match runner::launch(&run_spec) {
            Ok(outcome) => outcome,
            Err(HarnessError::Process(msg)) => {
                log::warn!("probe {}: runtime missing ({})", tag, msg);
                return Ok(toolchain_failure_report(probe, msg));
            }
            Err(e) => return Err(e),
        };

        let lines = outcome.stdout_lines();
        let scan = verdict::scan(&lines);
        let mut verified = Vec::new();
        let mut failed = Vec::new();
        for op in probe.operations {
            if op.verify(&lines) {
                verified.push(op.name());
            } else {
                failed.push(op.name());
            }
        }

        let (mut status, mut detail) = verdict::classify_run(&outcome, &scan, &failed);

        let mut deterministic = None;
        if self.config.check_determinism && status.is_pass() {
            let second = runner::launch(&run_spec)?;
            let same = second.exit_code == outcome.exit_code
                && second.stdout.bytes == outcome.stdout.bytes;
            deterministic = Some(same);
            if !same {
                log::warn!("probe {}: repeated runs disagreed", tag);
                (status, detail) = verdict::classify_nondeterminism(&outcome);
            }
        }

        log::info!("probe {}: {} ({:?})", tag, status, detail.cause);
        Ok(make_report(
            probe,
            status,
            detail,
            &outcome,
            &verified,
            &failed,
            deterministic,
        ))
    }

    /// Run the selected probes (catalog order) and aggregate.
    ///
    /// Unknown tags fail the whole invocation up front rather than producing
    /// a partial report.
    pub fn run_all(&self, languages: &[String]) -> Result<HarnessReport> {
        let mut tags = Vec::new();
        for language in languages {
            let tag = registry::canonical_tag(language)?;
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }
        if tags.is_empty() {
            return Err(HarnessError::Config("no probe languages selected".to_string()));
        }

        let results = if self.config.parallel && tags.len() > 1 {
            let (tx, rx) = unbounded();
            std::thread::scope(|scope| {
                for tag in &tags {
                    let tx = tx.clone();
                    scope.spawn(move || {
                        let _ = tx.send(self.run_probe(tag));
                    });
                }
                drop(tx);
                rx.iter().collect::<Vec<Result<ProbeReport>>>()
            })
        } else {
            tags.iter().map(|tag| self.run_probe(tag)).collect()
        };

        let mut reports = Vec::with_capacity(results.len());
        for result in results {
            reports.push(result?);
        }
        Ok(HarnessReport::from_results(reports))
    }
}

/// Report for a language whose toolchain binary could not be spawned at all.
fn toolchain_failure_report(probe: &ProbeSpec, message: String) -> ProbeReport {
    use crate::config::types::{OutputIntegrity, VerdictCause};

    ProbeReport {
        language: probe.language.to_string(),
        status: ProbeStatus::BuildFailure,
        verdict: VerdictDetail {
            cause: VerdictCause::ToolchainMissing,
            evidence_sources: vec!["spawn".to_string()],
            exit_code: None,
            terminating_signal: None,
            wall_elapsed_ms: 0,
            marker_line: None,
        },
        fingerprint: probe.fingerprint(),
        stdout: Vec::new(),
        stderr: vec![message],
        stdout_integrity: OutputIntegrity::Complete,
        stderr_integrity: OutputIntegrity::Complete,
        verified_operations: Vec::new(),
        failed_operations: Vec::new(),
        deterministic: None,
    }
}

#[allow(clippy::too_many_arguments)]
fn make_report(
    probe: &ProbeSpec,
    status: ProbeStatus,
    detail: VerdictDetail,
    outcome: &RunOutcome,
    verified: &[&'static str],
    failed: &[&'static str],
    deterministic: Option<bool>,
) -> ProbeReport {
    ProbeReport {
        language: probe.language.to_string(),
        status,
        verdict: detail,
        fingerprint: probe.fingerprint(),
        stdout: outcome.stdout.lines(),
        stderr: outcome.stderr.lines(),
        stdout_integrity: outcome.stdout.integrity,
        stderr_integrity: outcome.stderr.integrity,
        verified_operations: verified.iter().map(|s| s.to_string()).collect(),
        failed_operations: failed.iter().map(|s| s.to_string()).collect(),
        deterministic,
    }
}
