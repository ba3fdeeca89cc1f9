use crate::config::presets;
use crate::config::types::RunEnvelope;
use crate::harness::workspace::ProbeWorkspace;
use crate::lang::adapter::{ToolchainAdapter, ToolchainRequirement};

#[derive(Debug, Clone, Default)]
pub struct JavaAdapter;

const REQUIREMENTS: &[ToolchainRequirement] = &[
    ToolchainRequirement {
        command: "javac",
        version_arg: "-version",
    },
    ToolchainRequirement {
        command: "java",
        version_arg: "-version",
    },
];

impl ToolchainAdapter for JavaAdapter {
    fn language(&self) -> &'static str {
        "java"
    }

    fn compile_envelope(&self) -> RunEnvelope {
        presets::compile_envelope(self.language())
    }

    fn run_envelope(&self) -> RunEnvelope {
        presets::run_envelope(self.language())
    }

    fn compile_command(&self, workspace: &ProbeWorkspace) -> Vec<String> {
        vec![
            "javac".to_string(),
            "-d".to_string(),
            workspace.run_dir().to_string_lossy().to_string(),
            workspace.path("Probe.java").to_string_lossy().to_string(),
        ]
    }

    fn run_command(&self, workspace: &ProbeWorkspace) -> Vec<String> {
        vec![
            "java".to_string(),
            "-cp".to_string(),
            workspace.run_dir().to_string_lossy().to_string(),
            "Probe".to_string(),
        ]
    }

    fn requirements(&self) -> &'static [ToolchainRequirement] {
        REQUIREMENTS
    }
}
