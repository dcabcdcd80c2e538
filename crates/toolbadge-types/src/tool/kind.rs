use serde::{Deserialize, Serialize};
use std::fmt;

/// Tool classification by what the call does to the file it names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolKind {
    /// Viewing file contents
    Read,
    /// Creating or editing a file
    Write,
    /// Renaming a file
    Move,
    /// Deleting a file
    Delete,
    /// Unrecognized command or unknown tool
    Other,
}

impl ToolKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ToolKind::Read => "read",
            ToolKind::Write => "write",
            ToolKind::Move => "move",
            ToolKind::Delete => "delete",
            ToolKind::Other => "other",
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
