//! Canonical operations and their output-property checks.
//!
//! Every probe draws its behavior from this fixed, closed set. The checks are
//! pure functions over the probe's captured stdout lines: the concrete values
//! (Alice/30, squares of 0..4, circle of radius 5.0) are part of the contract
//! so the harness can verify them without language-specific knowledge.

use serde::{Deserialize, Serialize};

/// The fixed set of language-feature checks a probe may exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanonicalOp {
    /// Construct a record with a string field and a numeric field and print
    /// both verbatim on one line.
    RecordConstruction,
    /// Allocate a sequence of 5 numeric elements, populate each with the
    /// square of its index, print the sequence.
    SequenceAllocation,
    /// Transform an existing sequence in place by squaring; same printed form
    /// as [`CanonicalOp::SequenceAllocation`].
    SequenceTransform,
    /// Construct one concrete shape behind an abstract capability and print
    /// the computed area without caller knowledge of the variant.
    DynamicDispatch,
}

impl CanonicalOp {
    pub fn name(self) -> &'static str {
        match self {
            CanonicalOp::RecordConstruction => "record_construction",
            CanonicalOp::SequenceAllocation => "sequence_allocation",
            CanonicalOp::SequenceTransform => "sequence_transform",
            CanonicalOp::DynamicDispatch => "dynamic_dispatch",
        }
    }

    /// Check that the operation's expected output property holds somewhere in
    /// the probe's stdout lines.
    pub fn verify(self, lines: &[String]) -> bool {
        match self {
            CanonicalOp::RecordConstruction => lines.iter().any(|l| record_line_ok(l)),
            CanonicalOp::SequenceAllocation | CanonicalOp::SequenceTransform => {
                lines.iter().any(|l| l.trim() == SQUARES_LINE)
            }
            CanonicalOp::DynamicDispatch => lines.iter().any(|l| area_line_ok(l)),
        }
    }
}

impl std::fmt::Display for CanonicalOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Record field values every probe must print verbatim.
pub const RECORD_NAME: &str = "Alice";
pub const RECORD_AGE: u32 = 30;

/// Exact squares line for indices 0..4.
pub const SQUARES_LINE: &str = "Squares: 0 1 4 9 16";

/// Expected area of a circle with radius 5.0 (π·r²).
pub const CIRCLE_AREA: f64 = 78.5398;

/// Tolerance for the printed area; probes may use π ≈ 3.14159 and print with
/// four decimal places, so anything tighter than ~1e-3 would be flaky.
pub const CIRCLE_AREA_TOLERANCE: f64 = 1e-2;

fn record_line_ok(line: &str) -> bool {
    line.contains(RECORD_NAME) && line.contains(&RECORD_AGE.to_string())
}

fn area_line_ok(line: &str) -> bool {
    if !line.to_ascii_lowercase().contains("area") {
        return false;
    }
    // Last whitespace-separated token is the printed value.
    let Some(token) = line.split_whitespace().last() else {
        return false;
    };
    match token.parse::<f64>() {
        Ok(value) => (value - CIRCLE_AREA).abs() <= CIRCLE_AREA_TOLERANCE,
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_squares_line_must_match_exactly() {
        let ok = lines(&["Squares: 0 1 4 9 16"]);
        assert!(CanonicalOp::SequenceAllocation.verify(&ok));
        assert!(CanonicalOp::SequenceTransform.verify(&ok));

        let wrong_values = lines(&["Squares: 0 1 4 9 25"]);
        assert!(!CanonicalOp::SequenceAllocation.verify(&wrong_values));

        let trailing_space_tolerated = lines(&["Squares: 0 1 4 9 16 "]);
        assert!(CanonicalOp::SequenceAllocation.verify(&trailing_space_tolerated));
    }

    #[test]
    fn test_record_line_requires_both_fields() {
        assert!(CanonicalOp::RecordConstruction.verify(&lines(&["Record: name=Alice age=30"])));
        assert!(CanonicalOp::RecordConstruction.verify(&lines(&["Person: Alice, age 30"])));
        assert!(!CanonicalOp::RecordConstruction.verify(&lines(&["Record: name=Alice age=31"])));
        assert!(!CanonicalOp::RecordConstruction.verify(&lines(&["Record: age=30"])));
    }

    #[test]
    fn test_area_within_tolerance() {
        assert!(CanonicalOp::DynamicDispatch.verify(&lines(&["Circle area: 78.5398"])));
        // π ≈ 3.14159 gives 78.53975
        assert!(CanonicalOp::DynamicDispatch.verify(&lines(&["Circle area: 78.5397"])));
        assert!(!CanonicalOp::DynamicDispatch.verify(&lines(&["Circle area: 79.5398"])));
        assert!(!CanonicalOp::DynamicDispatch.verify(&lines(&["Circle area: radius"])));
        // A stray number on a non-area line must not satisfy the check.
        assert!(!CanonicalOp::DynamicDispatch.verify(&lines(&["wall ms: 78.54"])));
    }

    #[test]
    fn test_ops_verify_against_combined_output() {
        let output = lines(&[
            "Record: name=Alice age=30",
            "Squares: 0 1 4 9 16",
            "Circle area: 78.5398",
            "✓ cpp probe passed",
        ]);
        for op in [
            CanonicalOp::RecordConstruction,
            CanonicalOp::SequenceAllocation,
            CanonicalOp::SequenceTransform,
            CanonicalOp::DynamicDispatch,
        ] {
            assert!(op.verify(&output), "{op} failed against a good transcript");
        }
    }
}
