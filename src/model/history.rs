//! Data models for scaffold history persistence

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Outcome of one scaffold attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ScaffoldStatus {
    #[default]
    Created,
    Partial,
    Failed,
}

/// A single entry in the scaffold history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScaffoldHistoryEntry {
    pub timestamp: DateTime<Local>,
    pub course: String,
    pub title: String,
    pub folder: String,
    pub status: ScaffoldStatus,
}

impl ScaffoldHistoryEntry {
    pub fn status_icon(&self) -> &str {
        match self.status {
            ScaffoldStatus::Created => "✓",
            ScaffoldStatus::Partial => "◐",
            ScaffoldStatus::Failed => "✗",
        }
    }

    pub fn formatted_time(&self) -> String {
        self.timestamp.format("%Y-%m-%d %H:%M").to_string()
    }
}

/// Wrapper for persisting scaffold history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScaffoldHistory {
    pub entries: Vec<ScaffoldHistoryEntry>,
}

impl ScaffoldHistory {
    /// Entries beyond this count are dropped on save
    pub const MAX_ENTRIES: usize = 100;

    fn history_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".lectern"))
    }

    fn history_path() -> Option<PathBuf> {
        Self::history_dir().map(|dir| dir.join("history.json"))
    }

    pub fn load() -> Vec<ScaffoldHistoryEntry> {
        let history_path = match Self::history_path() {
            Some(p) => p,
            None => return Vec::new(),
        };

        if !history_path.exists() {
            return Vec::new();
        }

        let contents = match fs::read_to_string(&history_path) {
            Ok(c) => c,
            Err(_) => return Vec::new(),
        };

        match serde_json::from_str::<ScaffoldHistory>(&contents) {
            Ok(history) => history.entries,
            Err(_) => Vec::new(),
        }
    }

    pub fn save(entries: &[ScaffoldHistoryEntry]) -> Result<(), String> {
        let history_dir = Self::history_dir().ok_or("Could not determine home directory")?;

        if !history_dir.exists() {
            fs::create_dir_all(&history_dir)
                .map_err(|e| format!("Failed to create history directory: {}", e))?;
        }

        let history_path = Self::history_path().ok_or("Could not determine history path")?;

        let capped = if entries.len() > Self::MAX_ENTRIES {
            &entries[..Self::MAX_ENTRIES]
        } else {
            entries
        };

        let history = ScaffoldHistory {
            entries: capped.to_vec(),
        };

        let json = serde_json::to_string_pretty(&history)
            .map_err(|e| format!("Failed to serialize history: {}", e))?;

        fs::write(&history_path, json)
            .map_err(|e| format!("Failed to write history file: {}", e))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_icon_distinguishes_outcomes() {
        let mut entry = ScaffoldHistoryEntry {
            timestamp: Local::now(),
            course: "ECE2711".to_string(),
            title: "Intro".to_string(),
            folder: "Lectures/ECE2711/2024-03-05 intro".to_string(),
            status: ScaffoldStatus::Created,
        };
        let created = entry.status_icon().to_string();
        entry.status = ScaffoldStatus::Failed;
        assert_ne!(created, entry.status_icon());
    }
}
