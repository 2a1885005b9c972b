//! Canvas document generation
//!
//! Builds the whiteboard graph file that ties a lecture's artifacts together:
//! three positioned nodes (text summary, drawing embed, slides embed) and no
//! edges. Node rectangles come verbatim from the configured layout.

use crate::model::{BlockRect, CanvasLayout, LectureRequest};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanvasDocument {
    #[serde(rename = "type")]
    pub doc_type: String,
    pub version: String,
    pub nodes: Vec<CanvasNode>,
    pub edges: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanvasNode {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

fn node_id() -> String {
    Uuid::new_v4().simple().to_string()
}

fn text_node(rect: &BlockRect, text: String) -> CanvasNode {
    CanvasNode {
        id: node_id(),
        node_type: "text".to_string(),
        x: rect.x,
        y: rect.y,
        width: rect.width,
        height: rect.height,
        text: Some(text),
        file: None,
    }
}

fn file_node(rect: &BlockRect, file: String) -> CanvasNode {
    CanvasNode {
        id: node_id(),
        node_type: "file".to_string(),
        x: rect.x,
        y: rect.y,
        width: rect.width,
        height: rect.height,
        text: None,
        file: Some(file),
    }
}

/// Vault-relative path for a file inside the lecture folder, with forward
/// slashes regardless of platform
fn vault_path(folder: &Path, name: &str) -> String {
    let joined = folder.join(name);
    joined
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Build the canvas document for a lecture.
///
/// `folder` is the lecture folder the canvas will live in; file nodes
/// reference siblings by vault-relative path so the host resolves them from
/// anywhere in the vault.
pub fn build_canvas_document(
    request: &LectureRequest,
    layout: &CanvasLayout,
    folder: &Path,
    drawing_file: &str,
    slides_file: &str,
) -> Result<String> {
    let summary = format!(
        "# {}\n\n**Course:** {}\n**Date:** {}",
        request.title, request.course, request.date
    );

    let document = CanvasDocument {
        doc_type: "canvas".to_string(),
        version: "1.3.4".to_string(),
        nodes: vec![
            text_node(&layout.metadata_block, summary),
            file_node(&layout.drawing_block, vault_path(folder, drawing_file)),
            file_node(&layout.slides_block, vault_path(folder, slides_file)),
        ],
        edges: Vec::new(),
    };

    Ok(serde_json::to_string_pretty(&document)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::path::PathBuf;

    fn build() -> CanvasDocument {
        let request = LectureRequest::new("ECE2711", "RL Frequency Response", "2024-03-05");
        let folder = PathBuf::from("Lectures/ECE2711/2024-03-05 rl-frequency-response");
        let json = build_canvas_document(
            &request,
            &CanvasLayout::default(),
            &folder,
            "notes.excalidraw",
            "slides.md",
        )
        .unwrap();
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn test_exactly_three_nodes_and_no_edges() {
        let document = build();
        assert_eq!(document.doc_type, "canvas");
        assert_eq!(document.version, "1.3.4");
        assert_eq!(document.nodes.len(), 3);
        assert!(document.edges.is_empty());
    }

    #[test]
    fn test_node_rects_match_layout_exactly() {
        let layout = CanvasLayout::default();
        let document = build();

        let expected = [layout.metadata_block, layout.drawing_block, layout.slides_block];
        for (node, rect) in document.nodes.iter().zip(expected.iter()) {
            assert_eq!(node.x, rect.x);
            assert_eq!(node.y, rect.y);
            assert_eq!(node.width, rect.width);
            assert_eq!(node.height, rect.height);
        }
    }

    #[test]
    fn test_file_nodes_reference_siblings() {
        let document = build();

        assert_eq!(document.nodes[0].node_type, "text");
        assert!(document.nodes[0].text.as_deref().unwrap().contains("RL Frequency Response"));

        assert_eq!(document.nodes[1].node_type, "file");
        assert_eq!(
            document.nodes[1].file.as_deref(),
            Some("Lectures/ECE2711/2024-03-05 rl-frequency-response/notes.excalidraw")
        );
        assert_eq!(
            document.nodes[2].file.as_deref(),
            Some("Lectures/ECE2711/2024-03-05 rl-frequency-response/slides.md")
        );
    }

    #[test]
    fn test_node_ids_unique() {
        let document = build();
        let ids: HashSet<&str> = document.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids.len(), 3);
    }
}
