//! Metadata note and slides placeholder generation

use crate::model::LectureRequest;
use anyhow::Result;
use serde::Serialize;

#[derive(Serialize)]
struct FrontMatter<'a> {
    title: &'a str,
    course: &'a str,
    date: &'a str,
    tags: Vec<String>,
}

/// Render the `_meta.md` note: YAML front matter followed by boilerplate and
/// wiki-links to the sibling artifacts.
pub fn build_metadata_note(
    request: &LectureRequest,
    drawing_file: &str,
    slides_file: &str,
    canvas_file: &str,
) -> Result<String> {
    let front_matter = FrontMatter {
        title: &request.title,
        course: &request.course,
        date: &request.date,
        tags: vec!["lecture".to_string(), request.course.to_lowercase()],
    };
    let yaml = serde_yaml::to_string(&front_matter)?;

    // Wiki-links resolve without the .md extension
    let slides_link = slides_file.strip_suffix(".md").unwrap_or(slides_file);

    Ok(format!(
        "---\n{yaml}---\n\n\
         # {title}\n\n\
         ## Summary\n\n\
         - \n\n\
         ## Key points\n\n\
         - \n\n\
         ## Artifacts\n\n\
         - Whiteboard: [[{canvas_file}|Lecture canvas]]\n\
         - Drawing: [[{drawing_file}|Lecture drawing]]\n\
         - Slides: [[{slides_link}]]\n",
        yaml = yaml,
        title = request.title,
        canvas_file = canvas_file,
        drawing_file = drawing_file,
        slides_link = slides_link,
    ))
}

/// Render the `slides.md` placeholder. Users typically replace this file
/// with the course's exported slides.pdf.
pub fn build_slides_placeholder(title: &str) -> String {
    format!(
        "# Slides: {title}\n\n\
         No slides attached yet. Replace this file with the lecture's\n\
         slide deck (`slides.pdf`) or paste a link below.\n",
        title = title
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> LectureRequest {
        LectureRequest::new("ECE2711", "RL Frequency Response", "2024-03-05")
    }

    #[test]
    fn test_front_matter_keys() {
        let note = build_metadata_note(
            &request(),
            "notes.excalidraw",
            "slides.md",
            "2024-03-05 rl-frequency-response.canvas",
        )
        .unwrap();

        // Front matter is fenced and parseable
        let fence_end = note[3..].find("---").unwrap() + 3;
        let yaml = &note[3..fence_end];
        let parsed: serde_yaml::Value = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(parsed["title"], "RL Frequency Response");
        assert_eq!(parsed["course"], "ECE2711");
        assert_eq!(parsed["date"], "2024-03-05");
        assert_eq!(parsed["tags"][0], "lecture");
        assert_eq!(parsed["tags"][1], "ece2711");
    }

    #[test]
    fn test_note_links_siblings() {
        let note = build_metadata_note(
            &request(),
            "notes.excalidraw",
            "slides.md",
            "2024-03-05 rl-frequency-response.canvas",
        )
        .unwrap();

        assert!(note.contains("[[2024-03-05 rl-frequency-response.canvas|Lecture canvas]]"));
        assert!(note.contains("[[notes.excalidraw|Lecture drawing]]"));
        assert!(note.contains("[[slides]]"));
    }

    #[test]
    fn test_slides_placeholder_names_title() {
        let placeholder = build_slides_placeholder("RL Frequency Response");
        assert!(placeholder.starts_with("# Slides: RL Frequency Response"));
    }
}
