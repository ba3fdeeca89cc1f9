//! The probe contract: what every per-language probe must satisfy.

use crate::probe::canonical::CanonicalOp;
use sha2::{Digest, Sha256};

/// One per-language probe: a self-contained program exercising a subset of
/// the canonical operations and emitting the success marker iff every
/// operation completed.
///
/// Probes take no input, touch no filesystem or network, and are stateless
/// between runs; their only observable effects are stdout and the exit code.
#[derive(Debug, Clone, Copy)]
pub struct ProbeSpec {
    /// Canonical language tag ("c", "cpp", ...)
    pub language: &'static str,
    /// File name the source is written under inside the run workspace
    pub source_file: &'static str,
    /// Embedded probe source text
    pub source: &'static str,
    /// Canonical operations this probe exercises (subset meaningful to the
    /// language; order of execution inside the probe is unconstrained)
    pub operations: &'static [CanonicalOp],
}

impl ProbeSpec {
    /// SHA-256 fingerprint over the probe identity (language tag + source),
    /// reported so a pass/fail can be tied to exactly what was tested.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.language.as_bytes());
        hasher.update(b"\0");
        hasher.update(self.source.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    pub fn exercises(&self, op: CanonicalOp) -> bool {
        self.operations.contains(&op)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROBE: ProbeSpec = ProbeSpec {
        language: "c",
        source_file: "probe.c",
        source: "int main(void) { return 0; }\n",
        operations: &[CanonicalOp::RecordConstruction],
    };

    #[test]
    fn test_fingerprint_is_stable() {
        assert_eq!(PROBE.fingerprint(), PROBE.fingerprint());
        assert_eq!(PROBE.fingerprint().len(), 64);
    }

    #[test]
    fn test_fingerprint_covers_language_tag() {
        let relabeled = ProbeSpec {
            language: "cpp",
            ..PROBE
        };
        assert_ne!(PROBE.fingerprint(), relabeled.fingerprint());
    }

    #[test]
    fn test_exercises() {
        assert!(PROBE.exercises(CanonicalOp::RecordConstruction));
        assert!(!PROBE.exercises(CanonicalOp::DynamicDispatch));
    }
}
