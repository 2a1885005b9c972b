//! Services layer
//!
//! This module contains the scaffold generator and its collaborators:
//! - Slug derivation and plan generation (pure)
//! - Document builders for the drawing, canvas, and note formats
//! - The vault storage port and materialization
//! - The best-effort external drawing-tool bridge

pub mod bridge;
pub mod canvas;
pub mod excalidraw;
pub mod meta;
pub mod scaffold;
pub mod slug;
pub mod vault;

pub use bridge::{find_tool, launch_tool, CommandIntent, ExternalTool};
pub use excalidraw::DocumentStamp;
pub use scaffold::build_scaffold_plan;
pub use slug::slugify;
pub use vault::{materialize, DiskVault, MaterializeOutcome, Vault};
