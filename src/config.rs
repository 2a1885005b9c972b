use crate::model::CanvasLayout;
use crate::services::bridge::ExternalTool;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

fn default_vault_root() -> String {
    "Lectures".to_string()
}

fn default_warn() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Folder under which lecture scaffolds are created
    #[serde(default = "default_vault_root")]
    pub vault_root: String,
    /// Course code prefilled in the new-lecture dialog
    #[serde(default)]
    pub default_course: String,
    /// Warn when no external drawing tool matches at scaffold time
    #[serde(default = "default_warn")]
    pub warn_missing_drawing_tool: bool,
    /// Node rectangles for the generated canvas document
    #[serde(default)]
    pub layout: CanvasLayout,
    /// External tools the command bridge can match against
    #[serde(default)]
    pub external_tools: Vec<ExternalTool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vault_root: default_vault_root(),
            default_course: String::new(),
            warn_missing_drawing_tool: true,
            layout: CanvasLayout::default(),
            external_tools: Vec::new(),
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".lectern"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    pub fn load() -> Option<Config> {
        let config_path = Self::config_path()?;
        if !config_path.exists() {
            return None;
        }

        let contents = fs::read_to_string(&config_path).ok()?;
        serde_json::from_str(&contents).ok()
    }

    /// Save the config to disk
    pub fn save(&self) -> anyhow::Result<()> {
        let config_dir = Self::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)?;
        }

        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config path"))?;

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_fields() {
        // Older config files without the newer keys still deserialize
        let config: Config = serde_json::from_str(r#"{"default_course": "ECE2711"}"#).unwrap();
        assert_eq!(config.vault_root, "Lectures");
        assert_eq!(config.default_course, "ECE2711");
        assert!(config.warn_missing_drawing_tool);
        assert!(config.external_tools.is_empty());
        assert_eq!(config.layout, CanvasLayout::default());
    }
}
