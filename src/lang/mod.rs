//! Toolchain adapters.
//!
//! The harness core stays language-agnostic. Adapters define compile/run
//! command lines and execution envelopes for each supported language.

pub mod adapter;
pub mod c;
pub mod cpp;
pub mod java;
pub mod python;
pub mod registry;
