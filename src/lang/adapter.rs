use crate::config::types::RunEnvelope;
use crate::harness::workspace::ProbeWorkspace;

/// A toolchain binary an adapter needs, plus the argument that makes it print
/// its version (used by `check-deps`).
#[derive(Debug, Clone, Copy)]
pub struct ToolchainRequirement {
    pub command: &'static str,
    pub version_arg: &'static str,
}

/// Toolchain adapter contract for language-specific compile/run stages.
///
/// The harness core stays language-agnostic: adapters define the command
/// lines and envelopes, nothing else. An empty compile command means the
/// language has no compile stage.
pub trait ToolchainAdapter: Send + Sync {
    fn language(&self) -> &'static str;
    fn compile_envelope(&self) -> RunEnvelope;
    fn run_envelope(&self) -> RunEnvelope;
    fn compile_command(&self, workspace: &ProbeWorkspace) -> Vec<String>;
    fn run_command(&self, workspace: &ProbeWorkspace) -> Vec<String>;
    fn requirements(&self) -> &'static [ToolchainRequirement];
}
