//! Probe contract and built-in catalog.
//!
//! A probe is a minimal per-language program proving that the language's
//! toolchain and runtime semantics work end to end. The harness stays
//! language-agnostic; everything language-specific lives in the embedded
//! sources here and in the [`crate::lang`] adapters.

pub mod canonical;
pub mod catalog;
pub mod contract;

pub use canonical::CanonicalOp;
pub use contract::ProbeSpec;
