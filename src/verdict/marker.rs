//! Success-marker scanning.
//!
//! The marker is the human-readable corroboration of a pass: a line carrying
//! a check mark and the word "passed". It is subordinate to the exit status,
//! which remains ground truth; the scan only feeds the classifier.

/// The check mark every marker line must carry.
pub const MARKER_GLYPH: char = '✓';

/// The keyword every marker line must carry.
pub const MARKER_KEYWORD: &str = "passed";

/// Result of scanning a probe's stdout for marker lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerScan {
    /// Zero-based indices of marker lines
    pub marker_lines: Vec<usize>,
    /// Total stdout line count
    pub total_lines: usize,
}

impl MarkerScan {
    /// True iff exactly one marker line exists and it is the last line.
    pub fn is_unique_terminal(&self) -> bool {
        self.total_lines > 0
            && self.marker_lines.len() == 1
            && self.marker_lines[0] == self.total_lines - 1
    }

    pub fn marker_present(&self) -> bool {
        !self.marker_lines.is_empty()
    }
}

/// A line matches the marker pattern if it contains the check mark and the
/// keyword, in any surrounding text ("✓ C tests passed!" and "✓ c probe
/// passed" both match).
pub fn is_marker_line(line: &str) -> bool {
    line.contains(MARKER_GLYPH) && line.contains(MARKER_KEYWORD)
}

pub fn scan(lines: &[String]) -> MarkerScan {
    MarkerScan {
        marker_lines: lines
            .iter()
            .enumerate()
            .filter(|(_, l)| is_marker_line(l))
            .map(|(i, _)| i)
            .collect(),
        total_lines: lines.len(),
    }
}
