use serde::Serialize;

use super::args::{EditorArgs, FileManagerArgs};
use super::kind::ToolKind;
use crate::ToolInvocation;

/// Tool name of the file editing tool
pub const STR_REPLACE_EDITOR: &str = "str_replace_editor";

/// Tool name of the file management tool
pub const FILE_MANAGER: &str = "file_manager";

/// Typed view of a tool invocation's name and arguments
///
/// Every recognized `(tool, command)` pair has its own variant, and each
/// tool has an explicit fallback for commands it does not recognize. Tools
/// other than the two known ones keep only their name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "tool", rename_all = "snake_case")]
pub enum ToolCallPayload {
    /// `str_replace_editor` call
    StrReplaceEditor {
        command: EditorCommand,
        #[serde(skip_serializing_if = "Option::is_none")]
        path: Option<String>,
    },

    /// `file_manager` call
    FileManager {
        command: FileManagerCommand,
        #[serde(skip_serializing_if = "Option::is_none")]
        path: Option<String>,
    },

    /// Any other tool; arguments are not interpreted
    Unknown { name: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EditorCommand {
    Create,
    StrReplace,
    Insert,
    UndoEdit,
    View,
    /// Absent or unrecognized command
    Other(Option<String>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileManagerCommand {
    Rename {
        #[serde(skip_serializing_if = "Option::is_none")]
        new_path: Option<String>,
    },
    Delete,
    /// Absent or unrecognized command
    Other(Option<String>),
}

impl EditorCommand {
    pub fn parse(command: Option<&str>) -> Self {
        match command {
            Some("create") => EditorCommand::Create,
            Some("str_replace") => EditorCommand::StrReplace,
            Some("insert") => EditorCommand::Insert,
            Some("undo_edit") => EditorCommand::UndoEdit,
            Some("view") => EditorCommand::View,
            other => EditorCommand::Other(other.map(str::to_string)),
        }
    }
}

impl FileManagerCommand {
    pub fn parse(command: Option<&str>, new_path: Option<String>) -> Self {
        match command {
            Some("rename") => FileManagerCommand::Rename { new_path },
            Some("delete") => FileManagerCommand::Delete,
            other => FileManagerCommand::Other(other.map(str::to_string)),
        }
    }
}

impl ToolCallPayload {
    /// Normalize a raw tool name and argument object
    pub fn normalize(tool_name: &str, args: &serde_json::Value) -> Self {
        match tool_name {
            STR_REPLACE_EDITOR => {
                let args = EditorArgs::from_args(args);
                ToolCallPayload::StrReplaceEditor {
                    command: EditorCommand::parse(args.command.as_deref()),
                    path: args.path,
                }
            }
            FILE_MANAGER => {
                let args = FileManagerArgs::from_args(args);
                ToolCallPayload::FileManager {
                    command: FileManagerCommand::parse(args.command.as_deref(), args.new_path),
                    path: args.path,
                }
            }
            _ => ToolCallPayload::Unknown {
                name: tool_name.to_string(),
            },
        }
    }

    /// Get tool name regardless of variant
    pub fn name(&self) -> &str {
        match self {
            ToolCallPayload::StrReplaceEditor { .. } => STR_REPLACE_EDITOR,
            ToolCallPayload::FileManager { .. } => FILE_MANAGER,
            ToolCallPayload::Unknown { name } => name,
        }
    }

    /// Primary path argument, if the tool takes one
    pub fn path(&self) -> Option<&str> {
        match self {
            ToolCallPayload::StrReplaceEditor { path, .. } => path.as_deref(),
            ToolCallPayload::FileManager { path, .. } => path.as_deref(),
            ToolCallPayload::Unknown { .. } => None,
        }
    }

    /// Derive semantic ToolKind from the payload variant
    pub fn kind(&self) -> ToolKind {
        match self {
            ToolCallPayload::StrReplaceEditor { command, .. } => match command {
                EditorCommand::View => ToolKind::Read,
                EditorCommand::Create
                | EditorCommand::StrReplace
                | EditorCommand::Insert
                | EditorCommand::UndoEdit
                | EditorCommand::Other(_) => ToolKind::Write,
            },
            ToolCallPayload::FileManager { command, .. } => match command {
                FileManagerCommand::Rename { .. } => ToolKind::Move,
                FileManagerCommand::Delete => ToolKind::Delete,
                FileManagerCommand::Other(_) => ToolKind::Other,
            },
            ToolCallPayload::Unknown { .. } => ToolKind::Other,
        }
    }
}

impl From<&ToolInvocation> for ToolCallPayload {
    fn from(invocation: &ToolInvocation) -> Self {
        ToolCallPayload::normalize(&invocation.tool_name, &invocation.args)
    }
}
