//! Run-scoped workspaces.
//!
//! Each probe run gets its own uuid-named directory so concurrent runs never
//! collide on artifacts. Cleanup happens on every exit path (Drop), unless
//! the caller asked to keep artifacts for diagnosis.

use crate::config::types::{HarnessError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub struct ProbeWorkspace {
    run_id: String,
    run_dir: PathBuf,
    keep_artifacts: bool,
}

impl ProbeWorkspace {
    pub fn new(base_dir: &Path, keep_artifacts: bool) -> Result<Self> {
        let run_id = Uuid::new_v4().to_string();
        let run_dir = base_dir.join(&run_id);

        fs::create_dir_all(&run_dir).map_err(|e| {
            HarnessError::Workspace(format!(
                "failed to create workspace directory {}: {}",
                run_dir.display(),
                e
            ))
        })?;

        Ok(Self {
            run_id,
            run_dir,
            keep_artifacts,
        })
    }

    pub fn run_id(&self) -> &str {
        &self.run_id
    }

    pub fn run_dir(&self) -> &Path {
        &self.run_dir
    }

    /// Path of a named artifact inside the run directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.run_dir.join(name)
    }

    /// Write the probe source into the workspace.
    pub fn write_source(&self, file_name: &str, content: &str) -> Result<PathBuf> {
        let source_path = self.path(file_name);
        fs::write(&source_path, content).map_err(|e| {
            HarnessError::Workspace(format!(
                "failed to write source file {}: {}",
                source_path.display(),
                e
            ))
        })?;
        Ok(source_path)
    }

    /// Remove the run directory (idempotent).
    pub fn cleanup(&self) -> Result<()> {
        if self.run_dir.exists() {
            fs::remove_dir_all(&self.run_dir).map_err(|e| {
                HarnessError::Workspace(format!(
                    "failed to remove run directory {}: {}",
                    self.run_dir.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }
}

impl Drop for ProbeWorkspace {
    fn drop(&mut self) {
        if self.keep_artifacts {
            log::info!("keeping workspace artifacts in {}", self.run_dir.display());
            return;
        }
        if let Err(e) = self.cleanup() {
            log::warn!("workspace cleanup failed: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_creates_and_cleans_run_dir() {
        let base = tempfile::tempdir().unwrap();
        let dir;
        {
            let workspace = ProbeWorkspace::new(base.path(), false).unwrap();
            dir = workspace.run_dir().to_path_buf();
            assert!(dir.exists());
            assert!(!workspace.run_id().is_empty());
        }
        assert!(!dir.exists());
    }

    #[test]
    fn test_keep_artifacts_skips_cleanup() {
        let base = tempfile::tempdir().unwrap();
        let dir;
        {
            let workspace = ProbeWorkspace::new(base.path(), true).unwrap();
            workspace.write_source("probe.c", "int main(void) { return 0; }\n").unwrap();
            dir = workspace.run_dir().to_path_buf();
        }
        assert!(dir.exists());
        assert!(dir.join("probe.c").exists());
    }

    #[test]
    fn test_concurrent_workspaces_do_not_collide() {
        let base = tempfile::tempdir().unwrap();
        let a = ProbeWorkspace::new(base.path(), false).unwrap();
        let b = ProbeWorkspace::new(base.path(), false).unwrap();
        assert_ne!(a.run_dir(), b.run_dir());
    }

    #[test]
    fn test_cleanup_is_idempotent() {
        let base = tempfile::tempdir().unwrap();
        let workspace = ProbeWorkspace::new(base.path(), false).unwrap();
        workspace.cleanup().unwrap();
        workspace.cleanup().unwrap();
    }
}
