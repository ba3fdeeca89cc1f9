//! End-to-end harness tests.
//!
//! Tests that need a real language toolchain skip themselves when the
//! toolchain binary is absent, so the suite stays green on minimal hosts.

use polyprobe::config::types::{HarnessConfig, OutputLimits, ProbeStatus, RunEnvelope, VerdictCause};
use polyprobe::exec::runner::{launch, LaunchSpec};
use polyprobe::harness::Harness;
use polyprobe::probe::catalog;
use polyprobe::report::HarnessReport;
use polyprobe::verdict;
use std::process::Command;

fn toolchain_available(command: &str, version_arg: &str) -> bool {
    Command::new(command)
        .arg(version_arg)
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

fn harness_in(dir: &std::path::Path, check_determinism: bool) -> Harness {
    Harness::new(HarnessConfig {
        workspace_root: dir.to_path_buf(),
        parallel: false,
        check_determinism,
        keep_artifacts: false,
    })
    .unwrap()
}

#[test]
fn c_probe_passes_end_to_end() {
    if !toolchain_available("gcc", "--version") {
        eprintln!("skipping: gcc not installed");
        return;
    }
    let base = tempfile::tempdir().unwrap();
    let report = harness_in(base.path(), true).run_probe("c").unwrap();

    assert_eq!(report.status, ProbeStatus::Passed);
    assert_eq!(report.verdict.cause, VerdictCause::NormalExit);
    assert_eq!(report.verdict.exit_code, Some(0));
    assert_eq!(report.deterministic, Some(true));
    assert!(report.failed_operations.is_empty());
    assert!(report.stdout.contains(&"Squares: 0 1 4 9 16".to_string()));
    // Marker is the last stdout line.
    assert!(verdict::is_marker_line(report.stdout.last().unwrap()));
}

#[test]
fn cpp_probe_passes_end_to_end() {
    if !toolchain_available("g++", "--version") {
        eprintln!("skipping: g++ not installed");
        return;
    }
    let base = tempfile::tempdir().unwrap();
    let report = harness_in(base.path(), false).run_probe("cpp").unwrap();

    assert_eq!(report.status, ProbeStatus::Passed);
    assert!(report
        .verified_operations
        .iter()
        .any(|op| op == "dynamic_dispatch"));
    let area_line = report
        .stdout
        .iter()
        .find(|l| l.starts_with("Circle area:"))
        .expect("area line missing");
    let value: f64 = area_line.split_whitespace().last().unwrap().parse().unwrap();
    assert!((value - 78.5398).abs() < 1e-2);
}

#[test]
fn python_probe_passes_end_to_end() {
    if !toolchain_available("python3", "--version") {
        eprintln!("skipping: python3 not installed");
        return;
    }
    let base = tempfile::tempdir().unwrap();
    let report = harness_in(base.path(), true).run_probe("python").unwrap();

    assert_eq!(report.status, ProbeStatus::Passed);
    assert_eq!(report.deterministic, Some(true));
    assert!(report.stdout.iter().any(|l| l.contains("Alice") && l.contains("30")));
}

#[test]
fn probe_runs_are_deterministic() {
    if !toolchain_available("python3", "--version") {
        eprintln!("skipping: python3 not installed");
        return;
    }
    let base = tempfile::tempdir().unwrap();
    let harness = harness_in(base.path(), false);
    let first = harness.run_probe("python").unwrap();
    let second = harness.run_probe("python").unwrap();
    assert_eq!(first.status, second.status);
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(first.verdict.exit_code, second.verdict.exit_code);
}

#[test]
fn run_all_aggregates_available_languages() {
    let mut selected = Vec::new();
    if toolchain_available("gcc", "--version") {
        selected.push("c".to_string());
    }
    if toolchain_available("python3", "--version") {
        selected.push("python".to_string());
    }
    if selected.is_empty() {
        eprintln!("skipping: no probe toolchain installed");
        return;
    }

    let base = tempfile::tempdir().unwrap();
    let harness = Harness::new(HarnessConfig {
        workspace_root: base.path().to_path_buf(),
        parallel: true,
        check_determinism: false,
        keep_artifacts: false,
    })
    .unwrap();

    let report = harness.run_all(&selected).unwrap();
    assert!(report.all_passed);
    assert_eq!(report.passed, selected.len());
    assert_eq!(report.failed, 0);

    // Reports come back sorted by language and round-trip through JSON.
    let tags: Vec<&str> = report.results.iter().map(|r| r.language.as_str()).collect();
    let mut sorted = tags.clone();
    sorted.sort_unstable();
    assert_eq!(tags, sorted);

    let parsed: HarnessReport = serde_json::from_str(&report.to_json().unwrap()).unwrap();
    assert!(parsed.all_passed);
}

#[test]
fn workspaces_are_cleaned_after_runs() {
    if !toolchain_available("python3", "--version") {
        eprintln!("skipping: python3 not installed");
        return;
    }
    let base = tempfile::tempdir().unwrap();
    let harness = harness_in(base.path(), false);
    harness.run_probe("python").unwrap();

    let leftovers = std::fs::read_dir(base.path()).unwrap().count();
    assert_eq!(leftovers, 0);
}

#[test]
fn catalog_probe_fingerprints_appear_in_reports() {
    if !toolchain_available("python3", "--version") {
        eprintln!("skipping: python3 not installed");
        return;
    }
    let base = tempfile::tempdir().unwrap();
    let report = harness_in(base.path(), false).run_probe("py").unwrap();
    let probe = catalog::probe_for("python").unwrap();
    assert_eq!(report.fingerprint, probe.fingerprint());
    assert_eq!(report.language, "python");
}

#[test]
fn missing_toolchain_reports_build_failure() {
    if toolchain_available("javac", "-version") {
        eprintln!("skipping: javac is installed");
        return;
    }
    let base = tempfile::tempdir().unwrap();
    let report = harness_in(base.path(), false).run_probe("java").unwrap();
    assert_eq!(report.status, ProbeStatus::BuildFailure);
    assert_eq!(report.verdict.cause, VerdictCause::ToolchainMissing);
}

// The shell is always present, so marker/exit-code cross-validation can be
// exercised end to end without any probe toolchain.

fn shell_outcome(script: &str) -> polyprobe::exec::runner::RunOutcome {
    launch(&LaunchSpec {
        command: vec!["sh".to_string(), "-c".to_string(), script.to_string()],
        workdir: std::env::temp_dir(),
        envelope: RunEnvelope {
            wall_time_limit_ms: 5_000,
            output_limits: OutputLimits::default(),
        },
    })
    .unwrap()
}

#[test]
fn marker_with_nonzero_exit_is_reported_as_inconsistency() {
    let outcome = shell_outcome("echo '✓ fake probe passed'; exit 2");
    let lines = outcome.stdout_lines();
    let scan = verdict::scan(&lines);
    let (status, detail) = verdict::classify_run(&outcome, &scan, &[]);
    assert_eq!(status, ProbeStatus::MarkerMismatch);
    assert_eq!(detail.cause, VerdictCause::MarkerWithNonzeroExit);
}

#[test]
fn exit_zero_without_marker_is_reported_as_inconsistency() {
    let outcome = shell_outcome("echo 'Squares: 0 1 4 9 16'");
    let lines = outcome.stdout_lines();
    let scan = verdict::scan(&lines);
    let (status, detail) = verdict::classify_run(&outcome, &scan, &[]);
    assert_eq!(status, ProbeStatus::MarkerMismatch);
    assert_eq!(detail.cause, VerdictCause::MarkerMissing);
}

#[test]
fn hung_process_times_out() {
    let outcome = launch(&LaunchSpec {
        command: vec!["sh".to_string(), "-c".to_string(), "sleep 30".to_string()],
        workdir: std::env::temp_dir(),
        envelope: RunEnvelope {
            wall_time_limit_ms: 200,
            output_limits: OutputLimits::default(),
        },
    })
    .unwrap();
    let lines = outcome.stdout_lines();
    let scan = verdict::scan(&lines);
    let (status, detail) = verdict::classify_run(&outcome, &scan, &[]);
    assert_eq!(status, ProbeStatus::TimedOut);
    assert_eq!(detail.cause, VerdictCause::WatchdogKill);
}
