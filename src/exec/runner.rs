//! Process launch and evidence capture.
//!
//! The runner spawns one stage (compile or run) of a probe with a scrubbed
//! environment and no stdin, collects both output streams within bounds, and
//! enforces the envelope's wall-clock limit with a kill-on-expiry watchdog.
//! Everything the verdict layer needs is captured here; nothing is classified
//! here.

use crate::config::types::{HarnessError, Result, RunEnvelope};
use crate::exec::output::{spawn_collectors, CollectedStream};
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

/// One command to launch under an envelope.
#[derive(Debug, Clone)]
pub struct LaunchSpec {
    pub command: Vec<String>,
    pub workdir: PathBuf,
    pub envelope: RunEnvelope,
}

/// Raw evidence from one launched stage.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// Exit code if the process exited normally
    pub exit_code: Option<i32>,
    /// Terminating signal if it was killed (unix)
    pub terminating_signal: Option<i32>,
    /// True if the watchdog killed the process at the wall limit
    pub timed_out: bool,
    /// Wall-clock time from spawn to reap
    pub wall_elapsed_ms: u64,
    pub stdout: CollectedStream,
    pub stderr: CollectedStream,
}

impl RunOutcome {
    pub fn stdout_lines(&self) -> Vec<String> {
        self.stdout.lines()
    }
}

/// How often the watchdog polls the child.
const WATCHDOG_POLL: Duration = Duration::from_millis(20);

/// Launch `spec.command` and capture its outcome.
///
/// The child inherits nothing but PATH: probes must not depend on the
/// environment, and scrubbing it makes that hold by construction. Stdin is
/// null because probes must not block on input.
pub fn launch(spec: &LaunchSpec) -> Result<RunOutcome> {
    let (program, args) = spec
        .command
        .split_first()
        .ok_or_else(|| HarnessError::Process("empty command".to_string()))?;

    let mut command = Command::new(program);
    command
        .args(args)
        .current_dir(&spec.workdir)
        .env_clear()
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    if let Some(path) = std::env::var_os("PATH") {
        command.env("PATH", path);
    }

    let start = Instant::now();
    let mut child = command.spawn().map_err(|e| {
        HarnessError::Process(format!("failed to spawn {}: {}", program, e))
    })?;

    let (stdout_collector, stderr_collector) = spawn_collectors(
        child.stdout.take(),
        child.stderr.take(),
        spec.envelope.output_limits,
    );

    let wall_limit = Duration::from_millis(spec.envelope.wall_time_limit_ms);
    let mut timed_out = false;
    let status: ExitStatus = loop {
        match child.try_wait() {
            Ok(Some(status)) => break status,
            Ok(None) => {
                if start.elapsed() >= wall_limit {
                    timed_out = true;
                    log::warn!(
                        "watchdog: killing {} after {} ms",
                        program,
                        start.elapsed().as_millis()
                    );
                    // Kill, then reap; a race with normal exit is fine since
                    // kill on a reaped child is a no-op error we ignore.
                    let _ = child.kill();
                    break child.wait().map_err(HarnessError::Io)?;
                }
                std::thread::sleep(WATCHDOG_POLL);
            }
            Err(e) => return Err(HarnessError::Io(e)),
        }
    };

    let wall_elapsed_ms = start.elapsed().as_millis() as u64;
    let stdout = stdout_collector.map_or_else(CollectedStream::empty, |c| c.join());
    let stderr = stderr_collector.map_or_else(CollectedStream::empty, |c| c.join());

    Ok(RunOutcome {
        exit_code: status.code(),
        terminating_signal: terminating_signal(&status),
        timed_out,
        wall_elapsed_ms,
        stdout,
        stderr,
    })
}

#[cfg(unix)]
fn terminating_signal(status: &ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal()
}

#[cfg(not(unix))]
fn terminating_signal(_status: &ExitStatus) -> Option<i32> {
    None
}
