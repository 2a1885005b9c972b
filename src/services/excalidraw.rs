//! Excalidraw drawing document generation
//!
//! Produces the JSON envelope consumed by the Excalidraw family of drawing
//! tools: a labeled rectangle plus two text labels at fixed offsets. The
//! schema is dictated by the external tool and reproduced shape-for-shape;
//! only element ids and the seed/nonce/updated fields vary between runs.

use anyhow::Result;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Capture of the generation instant; seeds and nonces derive from it
#[derive(Debug, Clone, Copy)]
pub struct DocumentStamp {
    pub timestamp_ms: i64,
}

impl DocumentStamp {
    pub fn now() -> Self {
        Self {
            timestamp_ms: Utc::now().timestamp_millis(),
        }
    }

    /// Per-element seed, monotone in the element index
    fn seed(&self, index: i64) -> u32 {
        ((self.timestamp_ms + index) & 0x7fff_ffff) as u32
    }

    /// Per-element version nonce, offset so it never collides with seeds
    fn nonce(&self, index: i64) -> u32 {
        ((self.timestamp_ms + 31 * index + 17) & 0x7fff_ffff) as u32
    }
}

/// Top-level Excalidraw file envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawingDocument {
    #[serde(rename = "type")]
    pub doc_type: String,
    pub version: u32,
    pub source: String,
    pub elements: Vec<Element>,
    pub app_state: AppState,
    pub files: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub grid_size: Option<u32>,
    pub view_background_color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Roundness {
    #[serde(rename = "type")]
    pub roundness_type: u32,
}

/// A scene element. Text-specific fields live in `text_props` and are
/// flattened into the element object, matching the external schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub id: String,
    #[serde(rename = "type")]
    pub element_type: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub angle: f64,
    pub stroke_color: String,
    pub background_color: String,
    pub fill_style: String,
    pub stroke_width: f64,
    pub stroke_style: String,
    pub roughness: u32,
    pub opacity: u32,
    pub group_ids: Vec<String>,
    pub frame_id: Option<String>,
    pub roundness: Option<Roundness>,
    pub seed: u32,
    pub version: u32,
    pub version_nonce: u32,
    pub is_deleted: bool,
    pub bound_elements: Option<Vec<serde_json::Value>>,
    pub updated: i64,
    pub link: Option<String>,
    pub locked: bool,
    #[serde(flatten)]
    pub text_props: Option<TextProps>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextProps {
    pub text: String,
    pub font_size: f64,
    pub font_family: u32,
    pub text_align: String,
    pub vertical_align: String,
    pub container_id: Option<String>,
    pub original_text: String,
    pub line_height: f64,
}

fn new_element_id() -> String {
    Uuid::new_v4().simple().to_string()
}

fn base_element(stamp: &DocumentStamp, index: i64) -> Element {
    Element {
        id: new_element_id(),
        element_type: String::new(),
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
        angle: 0.0,
        stroke_color: "#1e1e1e".to_string(),
        background_color: "transparent".to_string(),
        fill_style: "solid".to_string(),
        stroke_width: 2.0,
        stroke_style: "solid".to_string(),
        roughness: 1,
        opacity: 100,
        group_ids: Vec::new(),
        frame_id: None,
        roundness: None,
        seed: stamp.seed(index),
        version: 1,
        version_nonce: stamp.nonce(index),
        is_deleted: false,
        bound_elements: None,
        updated: stamp.timestamp_ms,
        link: None,
        locked: false,
        text_props: None,
    }
}

fn text_element(
    stamp: &DocumentStamp,
    index: i64,
    text: &str,
    x: f64,
    y: f64,
    width: f64,
    font_size: f64,
) -> Element {
    let line_height = 1.25;
    Element {
        element_type: "text".to_string(),
        x,
        y,
        width,
        height: font_size * line_height,
        text_props: Some(TextProps {
            text: text.to_string(),
            font_size,
            font_family: 1,
            text_align: "left".to_string(),
            vertical_align: "top".to_string(),
            container_id: None,
            original_text: text.to_string(),
            line_height,
        }),
        ..base_element(stamp, index)
    }
}

/// Build the drawing document for a new lecture: a header rectangle with the
/// title and a smaller subtitle label beneath it.
pub fn build_drawing_document(title: &str, subtitle: &str, stamp: &DocumentStamp) -> Result<String> {
    let header = Element {
        element_type: "rectangle".to_string(),
        width: 560.0,
        height: 140.0,
        roundness: Some(Roundness { roundness_type: 3 }),
        ..base_element(stamp, 0)
    };

    let title_label = text_element(stamp, 1, title, 24.0, 24.0, 512.0, 28.0);
    let subtitle_label = text_element(stamp, 2, subtitle, 24.0, 76.0, 512.0, 20.0);

    let document = DrawingDocument {
        doc_type: "excalidraw".to_string(),
        version: 2,
        source: "lectern".to_string(),
        elements: vec![header, title_label, subtitle_label],
        app_state: AppState {
            grid_size: None,
            view_background_color: "#ffffff".to_string(),
        },
        files: serde_json::Map::new(),
    };

    Ok(serde_json::to_string_pretty(&document)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn stamp() -> DocumentStamp {
        DocumentStamp {
            timestamp_ms: 1_709_600_000_000,
        }
    }

    #[test]
    fn test_envelope_shape() {
        let json = build_drawing_document("RL Frequency Response", "ECE2711 2024-03-05", &stamp())
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["type"], "excalidraw");
        assert_eq!(parsed["version"], 2);
        assert_eq!(parsed["source"], "lectern");
        assert!(parsed["files"].as_object().unwrap().is_empty());
        assert_eq!(parsed["elements"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_element_ids_are_unique() {
        let json = build_drawing_document("Title", "Subtitle", &stamp()).unwrap();
        let document: DrawingDocument = serde_json::from_str(&json).unwrap();

        let ids: HashSet<&str> = document.elements.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids.len(), document.elements.len());
    }

    #[test]
    fn test_text_elements_carry_text_fields() {
        let json = build_drawing_document("Title", "Subtitle", &stamp()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        let elements = parsed["elements"].as_array().unwrap();

        assert_eq!(elements[0]["type"], "rectangle");
        assert!(elements[0].get("text").is_none());

        assert_eq!(elements[1]["type"], "text");
        assert_eq!(elements[1]["text"], "Title");
        assert_eq!(elements[1]["originalText"], "Title");
        assert_eq!(elements[2]["text"], "Subtitle");
        assert!(elements[2]["lineHeight"].is_number());
    }

    #[test]
    fn test_seeds_derive_from_stamp() {
        let json = build_drawing_document("Title", "Subtitle", &stamp()).unwrap();
        let document: DrawingDocument = serde_json::from_str(&json).unwrap();

        for element in &document.elements {
            assert!(element.seed > 0);
            assert_eq!(element.updated, stamp().timestamp_ms);
        }
        // Seeds are distinct per element
        let seeds: HashSet<u32> = document.elements.iter().map(|e| e.seed).collect();
        assert_eq!(seeds.len(), document.elements.len());
    }

    #[test]
    fn test_content_stable_modulo_generated_fields() {
        let a = build_drawing_document("Title", "Sub", &stamp()).unwrap();
        let b = build_drawing_document(
            "Title",
            "Sub",
            &DocumentStamp {
                timestamp_ms: 1_709_600_123_456,
            },
        )
        .unwrap();

        let strip = |raw: &str| -> serde_json::Value {
            let mut value: serde_json::Value = serde_json::from_str(raw).unwrap();
            for element in value["elements"].as_array_mut().unwrap() {
                let obj = element.as_object_mut().unwrap();
                obj.remove("id");
                obj.remove("seed");
                obj.remove("versionNonce");
                obj.remove("updated");
            }
            value
        };

        assert_eq!(strip(&a), strip(&b));
    }
}
