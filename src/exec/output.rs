//! Bounded output collection.
//!
//! Probe stdout is the signal the harness parses, so collection must survive
//! a misbehaving probe: per-stream byte limits, and an integrity tag instead
//! of silent truncation.

use crate::config::types::{OutputIntegrity, OutputLimits};
use std::io::{BufReader, Read};
use std::sync::mpsc::{channel, Sender};
use std::thread::{self, JoinHandle};

/// One collected stream plus how it ended.
#[derive(Debug, Clone)]
pub struct CollectedStream {
    pub bytes: Vec<u8>,
    pub integrity: OutputIntegrity,
}

impl CollectedStream {
    pub fn empty() -> Self {
        CollectedStream {
            bytes: Vec::new(),
            integrity: OutputIntegrity::Complete,
        }
    }

    /// Lossy UTF-8 view of the stream, split into lines.
    pub fn lines(&self) -> Vec<String> {
        String::from_utf8_lossy(&self.bytes)
            .lines()
            .map(|l| l.to_string())
            .collect()
    }
}

/// Handle to an in-flight stream collector thread.
pub struct StreamCollector {
    handle: JoinHandle<()>,
    rx: std::sync::mpsc::Receiver<CollectedStream>,
}

impl StreamCollector {
    /// Spawn a collector draining `stream` up to `limit` bytes.
    pub fn spawn<R: Read + Send + 'static>(stream: R, limit: usize) -> Self {
        let (tx, rx) = channel();
        let handle = thread::spawn(move || collect_stream(stream, limit, tx));
        StreamCollector { handle, rx }
    }

    /// Wait for the stream to finish (EOF, limit, or error).
    pub fn join(self) -> CollectedStream {
        let collected = self.rx.recv().unwrap_or(CollectedStream {
            bytes: Vec::new(),
            integrity: OutputIntegrity::ReadError,
        });
        let _ = self.handle.join();
        collected
    }
}

/// Spawn collectors for a child's stdout/stderr pair.
pub fn spawn_collectors<O, E>(
    stdout: Option<O>,
    stderr: Option<E>,
    limits: OutputLimits,
) -> (Option<StreamCollector>, Option<StreamCollector>)
where
    O: Read + Send + 'static,
    E: Read + Send + 'static,
{
    let stdout = stdout.map(|s| StreamCollector::spawn(s, limits.stdout_limit));
    let stderr = stderr.map(|s| StreamCollector::spawn(s, limits.stderr_limit));
    (stdout, stderr)
}

fn collect_stream<R: Read>(stream: R, limit: usize, tx: Sender<CollectedStream>) {
    let mut reader = BufReader::new(stream);
    let mut buffer = Vec::new();
    let mut chunk = [0u8; 4096];
    let mut integrity = OutputIntegrity::Complete;

    loop {
        match reader.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => {
                if buffer.len() + n > limit {
                    let remaining = limit - buffer.len();
                    buffer.extend_from_slice(&chunk[..remaining]);
                    integrity = OutputIntegrity::TruncatedByLimit;
                    break;
                }
                buffer.extend_from_slice(&chunk[..n]);
            }
            Err(e) => {
                integrity = if e.kind() == std::io::ErrorKind::BrokenPipe {
                    OutputIntegrity::TruncatedByProgramClose
                } else {
                    OutputIntegrity::ReadError
                };
                break;
            }
        }
    }

    let _ = tx.send(CollectedStream {
        bytes: buffer,
        integrity,
    });
}
