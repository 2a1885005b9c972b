//! Scaffold plan model
//!
//! The ephemeral output of the generator: a folder path plus the four
//! artifacts to materialize. A plan has no identity of its own; it is built
//! and consumed within a single submission.

use std::path::PathBuf;

/// One file to be written: where and what
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: PathBuf,
    pub content: String,
}

impl Artifact {
    pub fn new(path: PathBuf, content: String) -> Self {
        Self { path, content }
    }
}

/// The full set of files for one lecture
#[derive(Debug, Clone)]
pub struct ScaffoldPlan {
    /// Containing folder, created before any artifact is written
    pub folder: PathBuf,
    pub drawing: Artifact,
    pub slides: Artifact,
    pub metadata_note: Artifact,
    pub canvas: Artifact,
}

impl ScaffoldPlan {
    /// Artifacts in write order: drawing, slides, metadata note, canvas.
    /// The canvas references the others, so it is written last.
    pub fn artifacts(&self) -> [&Artifact; 4] {
        [&self.drawing, &self.slides, &self.metadata_note, &self.canvas]
    }
}
