//! Evidence and verdict: marker scanning plus pure classification.

pub mod classify;
pub mod marker;

pub use classify::{classify_build, classify_nondeterminism, classify_run, VerdictDetail};
pub use marker::{is_marker_line, scan, MarkerScan};
