use crate::config::presets;
use crate::config::types::RunEnvelope;
use crate::harness::workspace::ProbeWorkspace;
use crate::lang::adapter::{ToolchainAdapter, ToolchainRequirement};

#[derive(Debug, Clone, Default)]
pub struct PythonAdapter;

const REQUIREMENTS: &[ToolchainRequirement] = &[ToolchainRequirement {
    command: "python3",
    version_arg: "--version",
}];

impl ToolchainAdapter for PythonAdapter {
    fn language(&self) -> &'static str {
        "python"
    }

    fn compile_envelope(&self) -> RunEnvelope {
        // No compile stage; returning the run envelope keeps the interface uniform.
        self.run_envelope()
    }

    fn run_envelope(&self) -> RunEnvelope {
        presets::run_envelope(self.language())
    }

    fn compile_command(&self, _workspace: &ProbeWorkspace) -> Vec<String> {
        Vec::new()
    }

    fn run_command(&self, workspace: &ProbeWorkspace) -> Vec<String> {
        vec![
            "python3".to_string(),
            "-B".to_string(),
            "-S".to_string(),
            workspace.path("probe.py").to_string_lossy().to_string(),
        ]
    }

    fn requirements(&self) -> &'static [ToolchainRequirement] {
        REQUIREMENTS
    }
}
