//! Configuration: shared types, errors, and per-language envelope presets.

pub mod presets;
pub mod types;
