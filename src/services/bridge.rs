//! External drawing-tool bridge
//!
//! Best-effort integration with whatever drawing application the user has
//! configured. Tools are matched by regex against their human-readable names,
//! which is inherently brittle; a miss is a normal no-op, never an error.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::process::{Command, Stdio};
use std::sync::LazyLock;
use tracing::{debug, info};

/// A user-configured external tool the bridge can invoke
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalTool {
    /// Display name, matched against intent patterns
    pub name: String,
    /// Program to spawn
    pub program: String,
    /// Arguments placed before the target file path
    #[serde(default)]
    pub args: Vec<String>,
}

/// What the caller wants an external tool for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandIntent {
    /// Open the generated scene in a drawing application
    OpenDrawing,
    /// Convert a drawing into the tool's current format
    ConvertDrawing,
}

static OPEN_DRAWING_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"(?i)open .*(draw|sketch|scene)").unwrap(),
        Regex::new(r"(?i)excalidraw").unwrap(),
        Regex::new(r"(?i)whiteboard").unwrap(),
    ]
});

static CONVERT_DRAWING_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"(?i)convert .*(draw|scene|new format)").unwrap(),
        Regex::new(r"(?i)import .*(draw|scene)").unwrap(),
    ]
});

impl CommandIntent {
    fn patterns(&self) -> &'static [Regex] {
        match self {
            CommandIntent::OpenDrawing => &OPEN_DRAWING_PATTERNS,
            CommandIntent::ConvertDrawing => &CONVERT_DRAWING_PATTERNS,
        }
    }
}

/// Find the first configured tool whose name matches the intent.
///
/// Returns None when nothing matches; callers treat that as a silent skip.
pub fn find_tool<'a>(tools: &'a [ExternalTool], intent: CommandIntent) -> Option<&'a ExternalTool> {
    let found = tools
        .iter()
        .find(|tool| intent.patterns().iter().any(|re| re.is_match(&tool.name)));
    if found.is_none() {
        debug!(?intent, "no external tool matched");
    }
    found
}

/// Spawn the tool against a file, fire-and-forget.
///
/// The TUI never waits on the external process; stdio is detached so the
/// child cannot scribble over the terminal.
pub fn launch_tool(tool: &ExternalTool, file: &Path) -> anyhow::Result<()> {
    Command::new(&tool.program)
        .args(&tool.args)
        .arg(file)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    info!(tool = %tool.name, file = %file.display(), "launched external tool");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tool(name: &str) -> ExternalTool {
        ExternalTool {
            name: name.to_string(),
            program: "/usr/bin/true".to_string(),
            args: Vec::new(),
        }
    }

    #[test]
    fn test_find_tool_matches_by_display_name() {
        let tools = vec![tool("Terminal file manager"), tool("Open as Excalidraw drawing")];

        let found = find_tool(&tools, CommandIntent::OpenDrawing);
        assert_eq!(found.map(|t| t.name.as_str()), Some("Open as Excalidraw drawing"));
    }

    #[test]
    fn test_find_tool_is_case_insensitive() {
        let tools = vec![tool("EXCALIDRAW desktop")];
        assert!(find_tool(&tools, CommandIntent::OpenDrawing).is_some());
    }

    #[test]
    fn test_find_tool_returns_first_match() {
        let tools = vec![tool("Whiteboard A"), tool("Whiteboard B")];
        let found = find_tool(&tools, CommandIntent::OpenDrawing);
        assert_eq!(found.map(|t| t.name.as_str()), Some("Whiteboard A"));
    }

    #[test]
    fn test_find_tool_misses_silently() {
        let tools = vec![tool("Spreadsheet viewer")];
        assert!(find_tool(&tools, CommandIntent::OpenDrawing).is_none());
        assert!(find_tool(&[], CommandIntent::OpenDrawing).is_none());
    }

    #[test]
    fn test_convert_intent_uses_own_patterns() {
        let tools = vec![tool("Convert drawing to new format"), tool("Open as drawing")];

        let found = find_tool(&tools, CommandIntent::ConvertDrawing);
        assert_eq!(
            found.map(|t| t.name.as_str()),
            Some("Convert drawing to new format")
        );
    }
}
