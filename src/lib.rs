//! polyprobe: a polyglot toolchain smoke-test harness
//!
//! Verifies that each supported language's toolchain can compile and run a
//! minimal, canonical probe program, and interprets the result uniformly
//! across languages.
//!
//! # Architecture
//!
//! ## Probe Contract ([`probe`])
//! - [`probe::contract`]: what every per-language probe must satisfy
//! - [`probe::canonical`]: the fixed set of canonical operations and their
//!   output-property checks
//! - [`probe::catalog`]: embedded reference probes (c, cpp, java, python)
//!
//! ## Toolchain Adapters ([`lang`])
//! - [`lang::adapter`]: compile/run command contract per language
//! - [`lang::registry`]: alias-normalizing adapter lookup
//!
//! ## Execution Control ([`exec`])
//! - [`exec::runner`]: scrubbed-environment launch with a wall-clock watchdog
//! - [`exec::output`]: bounded stream collection with integrity tags
//!
//! ## Evidence & Verdict ([`verdict`])
//! - [`verdict::marker`]: success-marker scanning
//! - [`verdict::classify`]: pure, evidence-backed verdict classification
//!
//! ## Orchestration ([`harness`])
//! - [`harness::Harness`]: per-probe lifecycle and parallel fan-in
//! - [`harness::workspace`]: run-scoped artifact isolation
//!
//! ## Reporting ([`report`])
//! - per-probe and aggregate reports, JSON and human-readable
//!
//! # Design Principles
//!
//! 1. **Exit status is ground truth** - the marker corroborates, never decides
//! 2. **Evidence-backed verdicts** - classification is a pure function of
//!    captured evidence
//! 3. **Total isolation** - probes share no state; workspaces never collide
//! 4. **Language-agnostic core** - everything language-specific lives in the
//!    adapters and the embedded probe sources

pub mod cli;
pub mod config;
pub mod exec;
pub mod harness;
pub mod lang;
pub mod probe;
pub mod report;
pub mod verdict;

// Re-export commonly used types for convenience
pub use config::types::*;
