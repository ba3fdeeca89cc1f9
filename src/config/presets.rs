//! Per-language execution envelopes.
//!
//! Wall-clock limits are harness policy, not part of the probe contract; a
//! probe's expected runtime is near-instantaneous, so the run envelopes exist
//! only to bound a hung toolchain or runtime.

use crate::config::types::{OutputLimits, RunEnvelope};

fn envelope(wall_ms: u64) -> RunEnvelope {
    RunEnvelope {
        wall_time_limit_ms: wall_ms,
        output_limits: OutputLimits::default(),
    }
}

/// Compile-stage envelope for a language tag.
pub fn compile_envelope(language: &str) -> RunEnvelope {
    match language {
        // JVM toolchain startup dominates; give javac headroom.
        "java" => envelope(60_000),
        _ => envelope(45_000),
    }
}

/// Run-stage envelope for a language tag.
pub fn run_envelope(language: &str) -> RunEnvelope {
    match language {
        "java" => envelope(20_000),
        _ => envelope(15_000),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_envelope_exceeds_run_envelope() {
        for lang in ["c", "cpp", "python", "java"] {
            assert!(
                compile_envelope(lang).wall_time_limit_ms >= run_envelope(lang).wall_time_limit_ms
            );
        }
    }
}
