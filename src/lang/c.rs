use crate::config::presets;
use crate::config::types::RunEnvelope;
use crate::harness::workspace::ProbeWorkspace;
use crate::lang::adapter::{ToolchainAdapter, ToolchainRequirement};

#[derive(Debug, Clone, Default)]
pub struct CAdapter;

const REQUIREMENTS: &[ToolchainRequirement] = &[ToolchainRequirement {
    command: "gcc",
    version_arg: "--version",
}];

impl ToolchainAdapter for CAdapter {
    fn language(&self) -> &'static str {
        "c"
    }

    fn compile_envelope(&self) -> RunEnvelope {
        presets::compile_envelope(self.language())
    }

    fn run_envelope(&self) -> RunEnvelope {
        presets::run_envelope(self.language())
    }

    fn compile_command(&self, workspace: &ProbeWorkspace) -> Vec<String> {
        vec![
            "gcc".to_string(),
            "-std=c11".to_string(),
            "-O2".to_string(),
            "-pipe".to_string(),
            "-o".to_string(),
            workspace.path("probe").to_string_lossy().to_string(),
            workspace.path("probe.c").to_string_lossy().to_string(),
        ]
    }

    fn run_command(&self, workspace: &ProbeWorkspace) -> Vec<String> {
        vec![workspace.path("probe").to_string_lossy().to_string()]
    }

    fn requirements(&self) -> &'static [ToolchainRequirement] {
        REQUIREMENTS
    }
}
