use crate::config::presets;
use crate::config::types::RunEnvelope;
use crate::harness::workspace::ProbeWorkspace;
use crate::lang::adapter::{ToolchainAdapter, ToolchainRequirement};

#[derive(Debug, Clone, Default)]
pub struct CppAdapter;

const REQUIREMENTS: &[ToolchainRequirement] = &[ToolchainRequirement {
    command: "g++",
    version_arg: "--version",
}];

impl ToolchainAdapter for CppAdapter {
    fn language(&self) -> &'static str {
        "cpp"
    }

    fn compile_envelope(&self) -> RunEnvelope {
        presets::compile_envelope(self.language())
    }

    fn run_envelope(&self) -> RunEnvelope {
        presets::run_envelope(self.language())
    }

    fn compile_command(&self, workspace: &ProbeWorkspace) -> Vec<String> {
        vec![
            "g++".to_string(),
            "-std=c++17".to_string(),
            "-O2".to_string(),
            "-pipe".to_string(),
            "-o".to_string(),
            workspace.path("probe").to_string_lossy().to_string(),
            workspace.path("probe.cpp").to_string_lossy().to_string(),
        ]
    }

    fn run_command(&self, workspace: &ProbeWorkspace) -> Vec<String> {
        vec![workspace.path("probe").to_string_lossy().to_string()]
    }

    fn requirements(&self) -> &'static [ToolchainRequirement] {
        REQUIREMENTS
    }
}
