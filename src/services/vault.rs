//! Vault storage port and scaffold materialization
//!
//! The generator stays pure; everything that touches the filesystem goes
//! through the narrow `Vault` trait so materialization is testable against an
//! in-memory store.

use crate::model::ScaffoldPlan;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Narrow storage port over the notes vault
pub trait Vault {
    fn exists(&self, path: &Path) -> bool;
    fn mkdir_all(&self, path: &Path) -> Result<()>;
    fn write(&self, path: &Path, content: &str) -> Result<()>;
    fn read_to_string(&self, path: &Path) -> Result<String>;
}

/// Filesystem-backed vault rooted at a base directory
pub struct DiskVault {
    base: PathBuf,
}

impl DiskVault {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.base.join(path)
    }
}

impl Vault for DiskVault {
    fn exists(&self, path: &Path) -> bool {
        self.resolve(path).exists()
    }

    fn mkdir_all(&self, path: &Path) -> Result<()> {
        let full = self.resolve(path);
        fs::create_dir_all(&full)
            .with_context(|| format!("Failed to create folder {}", full.display()))
    }

    fn write(&self, path: &Path, content: &str) -> Result<()> {
        let full = self.resolve(path);
        fs::write(&full, content).with_context(|| format!("Failed to write {}", full.display()))
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        let full = self.resolve(path);
        fs::read_to_string(&full).with_context(|| format!("Failed to read {}", full.display()))
    }
}

/// What `materialize` did for each artifact path
#[derive(Debug, Default, Clone)]
pub struct MaterializeOutcome {
    pub written: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

/// Write a scaffold plan through the vault.
///
/// Creates the lecture folder, then writes artifacts sequentially. Artifacts
/// whose path already exists are skipped, so re-running a partially failed
/// scaffold completes it without clobbering user edits. A write failure
/// aborts the remaining sequence; files already written are left in place.
pub fn materialize(vault: &dyn Vault, plan: &ScaffoldPlan) -> Result<MaterializeOutcome> {
    vault.mkdir_all(&plan.folder)?;

    let mut outcome = MaterializeOutcome::default();
    for artifact in plan.artifacts() {
        if vault.exists(&artifact.path) {
            warn!(path = %artifact.path.display(), "artifact exists, skipping");
            outcome.skipped.push(artifact.path.clone());
            continue;
        }
        vault.write(&artifact.path, &artifact.content)?;
        info!(path = %artifact.path.display(), "wrote artifact");
        outcome.written.push(artifact.path.clone());
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CanvasLayout, LectureRequest};
    use crate::services::excalidraw::DocumentStamp;
    use crate::services::scaffold::build_scaffold_plan;
    use std::cell::RefCell;
    use std::collections::{HashMap, HashSet};

    /// In-memory vault used to exercise materialization without a disk
    #[derive(Default)]
    struct MemoryVault {
        files: RefCell<HashMap<PathBuf, String>>,
        dirs: RefCell<HashSet<PathBuf>>,
        fail_on: Option<PathBuf>,
    }

    impl Vault for MemoryVault {
        fn exists(&self, path: &Path) -> bool {
            self.files.borrow().contains_key(path) || self.dirs.borrow().contains(path)
        }

        fn mkdir_all(&self, path: &Path) -> Result<()> {
            self.dirs.borrow_mut().insert(path.to_path_buf());
            Ok(())
        }

        fn write(&self, path: &Path, content: &str) -> Result<()> {
            if self.fail_on.as_deref() == Some(path) {
                anyhow::bail!("disk full");
            }
            self.files
                .borrow_mut()
                .insert(path.to_path_buf(), content.to_string());
            Ok(())
        }

        fn read_to_string(&self, path: &Path) -> Result<String> {
            self.files
                .borrow()
                .get(path)
                .cloned()
                .ok_or_else(|| anyhow::anyhow!("not found: {}", path.display()))
        }
    }

    fn plan() -> ScaffoldPlan {
        let request = LectureRequest::new("ECE2711", "RL Frequency Response", "2024-03-05");
        build_scaffold_plan(
            &request,
            &CanvasLayout::default(),
            "Lectures",
            &DocumentStamp {
                timestamp_ms: 1_709_600_000_000,
            },
        )
        .unwrap()
    }

    #[test]
    fn test_materialize_writes_folder_and_four_files() {
        let vault = MemoryVault::default();
        let plan = plan();

        let outcome = materialize(&vault, &plan).unwrap();

        assert!(vault.dirs.borrow().contains(&plan.folder));
        assert_eq!(outcome.written.len(), 4);
        assert!(outcome.skipped.is_empty());
        for artifact in plan.artifacts() {
            assert_eq!(
                vault.read_to_string(&artifact.path).unwrap(),
                artifact.content
            );
        }
    }

    #[test]
    fn test_materialize_skips_existing_artifacts() {
        let vault = MemoryVault::default();
        let plan = plan();

        vault
            .write(&plan.metadata_note.path, "user edited this")
            .unwrap();

        let outcome = materialize(&vault, &plan).unwrap();

        assert_eq!(outcome.written.len(), 3);
        assert_eq!(outcome.skipped, vec![plan.metadata_note.path.clone()]);
        // Existing content is untouched
        assert_eq!(
            vault.read_to_string(&plan.metadata_note.path).unwrap(),
            "user edited this"
        );
    }

    #[test]
    fn test_materialize_aborts_on_write_failure() {
        let plan = plan();
        let vault = MemoryVault {
            fail_on: Some(plan.slides.path.clone()),
            ..Default::default()
        };

        let result = materialize(&vault, &plan);

        assert!(result.is_err());
        // Earlier writes remain; no rollback is attempted
        assert!(vault.exists(&plan.drawing.path));
        assert!(!vault.exists(&plan.metadata_note.path));
    }

    #[test]
    fn test_rerun_after_failure_completes_the_scaffold() {
        let plan = plan();
        let failing = MemoryVault {
            fail_on: Some(plan.canvas.path.clone()),
            ..Default::default()
        };
        assert!(materialize(&failing, &plan).is_err());

        // Same state, failure cleared
        let retry = MemoryVault {
            files: RefCell::new(failing.files.borrow().clone()),
            dirs: RefCell::new(failing.dirs.borrow().clone()),
            fail_on: None,
        };
        let outcome = materialize(&retry, &plan).unwrap();

        assert_eq!(outcome.written, vec![plan.canvas.path.clone()]);
        assert_eq!(outcome.skipped.len(), 3);
    }

    #[test]
    fn test_disk_vault_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let vault = DiskVault::new(dir.path());
        let plan = plan();

        materialize(&vault, &plan).unwrap();

        assert!(dir
            .path()
            .join("Lectures/ECE2711/2024-03-05 rl-frequency-response/notes.excalidraw")
            .exists());
        let canvas = vault.read_to_string(&plan.canvas.path).unwrap();
        assert_eq!(canvas, plan.canvas.content);
    }
}
