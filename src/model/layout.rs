//! Canvas layout model
//!
//! The three named rectangles that position the generated canvas nodes.
//! Persisted as part of the config and editable from the settings dialog.

use serde::{Deserialize, Serialize};

/// A rectangle in canvas coordinate units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlockRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BlockRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }
}

/// Positions for the three canvas nodes of a lecture scaffold
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasLayout {
    pub metadata_block: BlockRect,
    pub slides_block: BlockRect,
    pub drawing_block: BlockRect,
}

impl Default for CanvasLayout {
    fn default() -> Self {
        // Summary on the left, drawing in the middle, slides on the right
        Self {
            metadata_block: BlockRect::new(-900.0, -400.0, 520.0, 800.0),
            drawing_block: BlockRect::new(-340.0, -400.0, 900.0, 800.0),
            slides_block: BlockRect::new(600.0, -400.0, 700.0, 800.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_round_trips_through_json() {
        let layout = CanvasLayout::default();
        let json = serde_json::to_string(&layout).unwrap();
        let parsed: CanvasLayout = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, layout);
    }

    #[test]
    fn test_default_blocks_do_not_overlap_horizontally() {
        let layout = CanvasLayout::default();
        assert!(layout.metadata_block.x + layout.metadata_block.width <= layout.drawing_block.x);
        assert!(layout.drawing_block.x + layout.drawing_block.width <= layout.slides_block.x);
    }
}
