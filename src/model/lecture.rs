//! Lecture request model
//!
//! A LectureRequest is built from the new-lecture dialog and consumed by the
//! scaffold generator. It lives for a single submission.

use serde::{Deserialize, Serialize};

/// User-supplied fields for one lecture scaffold
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LectureRequest {
    /// Course code, e.g. "ECE2711"
    pub course: String,
    /// Human-readable lecture title
    pub title: String,
    /// Calendar date, normally ISO-8601 (free text is accepted)
    pub date: String,
}

impl LectureRequest {
    pub fn new(course: impl Into<String>, title: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            course: course.into(),
            title: title.into(),
            date: date.into(),
        }
    }

    /// Validate the request for submission.
    ///
    /// Only course and title are required; the date field is free text.
    /// Returns the first problem found, or None if the request is submittable.
    pub fn validate(&self) -> Option<String> {
        if self.course.trim().is_empty() {
            return Some("Course code is required".to_string());
        }
        if self.title.trim().is_empty() {
            return Some("Lecture title is required".to_string());
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_empty_course() {
        let request = LectureRequest::new("", "RL Frequency Response", "2024-03-05");
        assert!(request.validate().is_some());

        let request = LectureRequest::new("   ", "RL Frequency Response", "2024-03-05");
        assert!(request.validate().is_some());
    }

    #[test]
    fn test_validate_rejects_empty_title() {
        let request = LectureRequest::new("ECE2711", "", "2024-03-05");
        assert!(request.validate().is_some());
    }

    #[test]
    fn test_validate_accepts_complete_request() {
        let request = LectureRequest::new("ECE2711", "RL Frequency Response", "2024-03-05");
        assert!(request.validate().is_none());
    }

    #[test]
    fn test_validate_allows_free_text_date() {
        // The date field is not normalized beyond being accepted as-is
        let request = LectureRequest::new("ECE2711", "Intro", "next tuesday");
        assert!(request.validate().is_none());
    }
}
